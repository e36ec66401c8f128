//! Reporting utilities: formatted terminal output for solve runs.

pub mod format;

pub use format::*;
