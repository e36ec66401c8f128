//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - decoded evidence (`Point`, `Root`) and raw digit values (`DigitValue`)
//! - run configuration (`SolveConfig`, `SolveMode`, `SearchStrategy`)
//! - fit outputs that are not tied to one solver (`Coefficients`)

pub mod types;

pub use types::*;
