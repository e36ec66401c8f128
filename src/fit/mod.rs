//! Solving for the constant coefficient.
//!
//! Responsibilities:
//!
//! - enumerate candidate triples lazily (`triples`)
//! - three-point Cramer fit, sequential or parallel (`fitter`)
//! - two-roots-plus-point factoring (`roots`)

pub mod fitter;
pub mod roots;
pub mod triples;

pub use fitter::*;
pub use roots::*;
pub use triples::*;
