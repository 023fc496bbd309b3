//! Shared utilities for the contest workspace.

pub mod logging;

pub use logging::{init_logging, LogFormat};
