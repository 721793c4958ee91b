//! Core building blocks: settings and environment, path normalization, argument
//! rendering and result interpretation. These are consumed by the high-level
//! `api` module.
pub mod args;
pub mod paths;
pub mod result;
pub mod settings;
