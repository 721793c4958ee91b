use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::Result;

/// One element of the raw report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<ReportNode>,
}

impl ReportNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&ReportNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Descendants named `name` in document order, excluding `self`.
    pub fn descendants<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ReportNode> + 'a {
        let mut stack: Vec<&ReportNode> = self.children.iter().rev().collect();
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                stack.extend(node.children.iter().rev());
                if node.name == name {
                    return Some(node);
                }
            }
            None
        })
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self> {
        let mut node = ReportNode::new(String::from_utf8_lossy(e.name().as_ref()));
        for attr in e.attributes() {
            let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.unescape_value()?.to_string();
            node.attributes.push((key, value));
        }
        Ok(node)
    }
}

/// A `Group` that reports a change or an error.
#[derive(Debug, Clone, Copy)]
pub struct GroupChange<'a> {
    pub node: &'a ReportNode,
}

impl<'a> GroupChange<'a> {
    pub fn change(&self) -> Option<&'a str> {
        self.node.attribute("Change")
    }

    pub fn error_detail(&self) -> Option<&'a str> {
        self.node.attribute("ErrorDetail")
    }

    /// Error detail when present, else the change classification.
    pub fn message(&self) -> Option<&'a str> {
        self.error_detail().or_else(|| self.change())
    }
}

/// Any `HasErrors` attribute marks the group, whatever its value.
fn has_error_marker(group: &ReportNode) -> bool {
    group.attribute("HasErrors").is_some()
}

/// Parsed raw XML report written by the console through `-raw`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReport {
    /// `None` for an empty document.
    pub root: Option<ReportNode>,
}

impl RawReport {
    pub fn parse_str(xml: &str) -> Result<Self> {
        let xml = xml.trim_start_matches('\u{feff}');
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut stack: Vec<ReportNode> = Vec::new();
        let mut root: Option<ReportNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => stack.push(ReportNode::from_start(e)?),
                Event::Empty(ref e) => {
                    let node = ReportNode::from_start(e)?;
                    attach(&mut stack, &mut root, node);
                }
                Event::End(_) => {
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(quick_xml::Error::UnexpectedEof(format!("unclosed <{}>", open.name)).into());
        }
        Ok(Self { root })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let xml = std::fs::read_to_string(path)?;
        Self::parse_str(&xml)
    }

    /// `AssemblyComparison/Groups` when the report has that shape.
    pub fn groups(&self) -> Option<&ReportNode> {
        self.root
            .as_ref()
            .filter(|r| r.name == "AssemblyComparison")
            .and_then(|r| r.child("Groups"))
    }

    /// First `Group` whose `Change` is not `None` or that carries an error marker.
    pub fn first_changed_group(&self) -> Option<GroupChange<'_>> {
        self.groups()?
            .descendants("Group")
            .find(|g| g.attribute("Change") != Some("None") || has_error_marker(g))
            .map(|node| GroupChange { node })
    }
}

fn attach(stack: &mut [ReportNode], root: &mut Option<ReportNode>, node: ReportNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}
