//! Synthetic evidence documents for end-to-end checks.

pub mod sample;

pub use sample::{SampleData, SampleSpec, generate_sample};
