//! Exact arithmetic: base-N decoding, reduced fractions, and 3×3 determinants.

pub mod codec;
pub mod det;
pub mod fraction;

pub use codec::{decode, encode};
pub use det::{Matrix3, det};
pub use fraction::Fraction;
