//! Exact recovery of a quadratic's constant term from base-N evidence.
//!
//! Layers, bottom up: `math` (big-integer codec, reduced fractions, 3×3
//! determinants), `fit` (three-point Cramer search and root factoring), `io`
//! (evidence documents and solution files), then `app` which wires them to the
//! `qc` binary.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod math;
pub mod report;

#[cfg(test)]
mod proptests;
