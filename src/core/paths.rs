use std::path::{Path, PathBuf};

use crate::core::settings::ToolEnvironment;

fn is_separator(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

fn has_drive(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// A leading separator, or a drive letter followed by a separator.
fn is_rooted(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.first().copied().is_some_and(is_separator)
        || (has_drive(bytes) && bytes.get(2).copied().is_some_and(is_separator))
}

/// The part after the drive of a drive-relative path such as `C:lib\My.dll`.
fn strip_drive_relative(path: &str) -> Option<&str> {
    (has_drive(path.as_bytes()) && !is_rooted(path)).then(|| &path[2..])
}

/// Lexically collapse `.` and `..` segments of a rooted path, returning the
/// root prefix and the remaining segments.
fn collapse(path: &str) -> (String, Vec<&str>) {
    let unc = path.starts_with("//") || path.starts_with("\\\\");
    let mut segments = path.split(['/', '\\']).filter(|s| !s.is_empty()).peekable();

    let drive = match segments.peek() {
        Some(first) if !unc && first.len() == 2 && first.ends_with(':') => Some(first.to_string()),
        _ => None,
    };
    let prefix = match drive {
        Some(drive) => {
            segments.next();
            drive
        }
        None if unc => "//".to_string(),
        None => "/".to_string(),
    };

    let mut stack: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }
    (prefix, stack)
}

/// Absolute form of `path` as the tool expects it: relative paths are joined to
/// the working directory, and separators follow the target platform family.
/// Drive-relative paths (`C:foo`) drop the drive and resolve against the
/// working directory.
pub fn normalized_absolute_path(path: &Path, env: &ToolEnvironment) -> String {
    let raw = path.to_string_lossy();
    let absolute = if is_rooted(&raw) {
        raw.into_owned()
    } else {
        let relative = strip_drive_relative(&raw).unwrap_or(&*raw);
        format!("{}/{}", env.working_directory.to_string_lossy(), relative)
    };

    let (prefix, segments) = collapse(&absolute);
    let sep = env.platform.separator();
    let mut out = match prefix.as_str() {
        "/" => sep.to_string(),
        "//" => format!("{sep}{sep}"),
        drive => format!("{drive}{sep}"),
    };
    out.push_str(&segments.join(sep.to_string().as_str()));
    out
}

/// Host path for file system checks, relative to the working directory.
pub fn resolve_on_host(path: &Path, env: &ToolEnvironment) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env.working_directory.join(path)
    }
}
