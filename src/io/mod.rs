//! Input/output helpers.
//!
//! - evidence-document ingest + decoding (`ingest`)
//! - solution and generated-document JSON (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
