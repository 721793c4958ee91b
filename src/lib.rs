#![doc = r##"
bitdiffer-runner — drive the BitDiffer assembly comparison console from build pipelines.

This crate renders comparison settings into BitDiffer.Console flags, runs the tool,
and interprets its captured output and raw XML report into a small verdict:
did anything change, and what was the message. It powers the `bitdiffer-runner`
CLI and can be embedded in your own build tooling.

Add dependency
--------------
```toml
[dependencies]
bitdiffer-runner = "0.1"
```

Quick start: compare two assemblies
-----------------------------------
```rust,no_run
use bitdiffer_runner::{compare_assemblies, BitDifferSettings, IsolationLevel};

fn main() -> bitdiffer_runner::Result<()> {
    let settings = BitDifferSettings {
        isolation_level: IsolationLevel::High,
        compare_only_public: true,
        ..BitDifferSettings::new("./Version1/MyAssembly.dll", "./Version2/MyAssembly.dll")
    };

    let result = compare_assemblies(&settings)?;
    if result.has_changes() {
        eprintln!("changed: {}", result.change_message().unwrap_or_default());
    }
    Ok(())
}
```

Interpret an existing run
-------------------------
```rust
use bitdiffer_runner::{BitDifferResult, RawReport};

fn main() -> bitdiffer_runner::Result<()> {
    let report = RawReport::parse_str(
        r#"<AssemblyComparison><Groups>
             <Group Change="MembersChangedBreaking" />
           </Groups></AssemblyComparison>"#,
    )?;
    let result = BitDifferResult::new(vec!["Done!".to_string()], Some(report));
    assert!(result.has_changes());
    assert_eq!(result.change_message().as_deref(), Some("MembersChangedBreaking"));
    Ok(())
}
```

Error handling
--------------
All public functions return `bitdiffer_runner::Result<T>`; match on `bitdiffer_runner::Error`
to handle specific cases, e.g. a missing assembly or a tool that cannot be found.

```rust,no_run
use bitdiffer_runner::{compare_assemblies, BitDifferSettings, Error};

fn main() {
    let settings = BitDifferSettings::new("/bad/Old.dll", "/bad/New.dll");
    match compare_assemblies(&settings) {
        Ok(result) => println!("changes: {}", result.has_changes()),
        Err(Error::InvalidArtifact { field, .. }) => eprintln!("bad setting: {field}"),
        Err(Error::ToolNotFound { reason }) => eprintln!("tool: {reason}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — the runner and convenience entry points.
- [`core`] — settings, argument rendering and result interpretation.
- [`io`] — tool lookup, stdout log and raw report parsing.
- [`types`] — `IsolationLevel` and `PlatformFamily`.
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::args::{ToolArgument, ToolArguments, ValidatedSettings, build_arguments};
pub use crate::core::paths::normalized_absolute_path;
pub use crate::core::result::{BitDifferResult, ComparisonSummary};
pub use crate::core::settings::{BitDifferSettings, ToolEnvironment};
pub use error::{Error, Result};
pub use types::{IsolationLevel, PlatformFamily};

pub use io::{GroupChange, RawReport, ReportNode, ToolCommand, ToolLocator, ToolLog};

pub use api::{BitDifferRunner, compare_assemblies, compare_assemblies_with};
