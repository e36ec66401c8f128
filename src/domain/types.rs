//! Shared domain types.
//!
//! Decoded evidence (`Point`, `Root`) is immutable after loading; solving
//! produces new `Fraction` values instead of modifying inputs.

use std::path::PathBuf;

use clap::ValueEnum;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::math::Fraction;

/// A raw `{ base, value }` pair before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitValue {
    pub base: u32,
    pub text: String,
}

impl DigitValue {
    pub fn decode(&self) -> Result<BigInt, SolveError> {
        crate::math::decode(&self.text, self.base)
    }
}

/// A decoded sample point on the curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
    /// Original document key, kept for traceability in output.
    pub label: String,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>, label: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            label: label.into(),
        }
    }
}

/// A decoded root of the polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    pub r: BigInt,
    pub label: String,
}

impl Root {
    pub fn new(r: impl Into<BigInt>, label: impl Into<String>) -> Self {
        Self {
            r: r.into(),
            label: label.into(),
        }
    }
}

/// Which evidence set drives the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveMode {
    /// Two roots plus one point (factoring).
    Roots,
    /// Three points (Cramer's rule).
    Points,
}

impl SolveMode {
    pub fn display_name(self) -> &'static str {
        match self {
            SolveMode::Roots => "A (roots + point)",
            SolveMode::Points => "B (three points)",
        }
    }
}

/// How the three-point search walks the candidate triples.
///
/// Both strategies return the first non-degenerate triple in `(i, j, k)`
/// order, so results are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    Sequential,
    Parallel,
}

/// `a`, `b` and `c` recovered from one non-degenerate triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coefficients {
    pub a: Fraction,
    pub b: Fraction,
    pub c: Fraction,
}

/// A fraction as written to JSON: decimal strings, so values of any size
/// survive tools that parse numbers as doubles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionRecord {
    pub num: String,
    pub den: String,
}

impl From<&Fraction> for FractionRecord {
    fn from(f: &Fraction) -> Self {
        Self {
            num: f.numer().to_string(),
            den: f.denom().to_string(),
        }
    }
}

/// A saved solution file (JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionFile {
    pub tool: String,
    pub mode: SolveMode,
    pub c: FractionRecord,
    pub c_display: String,
    /// Labels of the evidence records consumed.
    pub used: Vec<String>,
    /// Root values (mode A).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roots: Option<[String; 2]>,
    /// Sample point `[x, y]` (mode A).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<[String; 2]>,
}

/// A full solve run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub points_path: PathBuf,
    /// Present iff mode A was requested.
    pub roots_path: Option<PathBuf>,
    /// Truncate each evidence set to the document's `keys.k`.
    pub use_k: bool,
    pub search: SearchStrategy,
    /// Also report `a` and `b` (mode B only).
    pub coefficients: bool,
    pub export: Option<PathBuf>,
}

impl SolveConfig {
    pub fn mode(&self) -> SolveMode {
        if self.roots_path.is_some() {
            SolveMode::Roots
        } else {
            SolveMode::Points
        }
    }
}
