//! I/O layer around the external console: locating the executable (`tool`),
//! reading its captured standard output (`log`) and its raw XML report (`report`).
pub mod log;
pub use log::ToolLog;

pub mod report;
pub use report::{GroupChange, RawReport, ReportNode};

pub mod tool;
pub use tool::{ToolCommand, ToolLocator};
