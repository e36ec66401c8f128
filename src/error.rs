//! Error types.
//!
//! Two layers:
//!
//! - `SolveError`: the typed failure taxonomy of the exact-arithmetic core and
//!   the evidence loader. Every core operation returns it; nothing below the
//!   application boundary exits the process.
//! - `AppError`: the process boundary (message + exit code), built either
//!   directly for I/O / argument problems or from a `SolveError`.

use thiserror::Error;

/// Bare classification of a [`SolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidDigit,
    UnsupportedBase,
    DivisionByZero,
    InsufficientData,
    AllTriplesDegenerate,
}

/// Failure of a decode or solve step. Always fatal to the current computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("unsupported base {base} (expected 2..=36)")]
    UnsupportedBase { base: String },

    #[error("division by zero: {context}")]
    DivisionByZero { context: String },

    #[error("insufficient data: need at least {needed} {what}, got {found}")]
    InsufficientData {
        what: &'static str,
        needed: usize,
        found: usize,
    },

    #[error(
        "all triples degenerate: {points} points share only {distinct_x} distinct x-values; cannot solve quadratic from points"
    )]
    AllTriplesDegenerate { points: usize, distinct_x: usize },

    /// Attaches the offending record key to a failure raised while loading it.
    #[error("record `{label}`: {source}")]
    Record {
        label: String,
        #[source]
        source: Box<SolveError>,
    },
}

impl SolveError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SolveError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn division_by_zero(context: impl Into<String>) -> Self {
        SolveError::DivisionByZero {
            context: context.into(),
        }
    }

    /// Wrap this error with the key of the record that produced it.
    pub fn at_record(self, label: impl Into<String>) -> Self {
        SolveError::Record {
            label: label.into(),
            source: Box::new(self),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::InvalidInput { .. } => ErrorKind::InvalidInput,
            SolveError::InvalidDigit { .. } => ErrorKind::InvalidDigit,
            SolveError::UnsupportedBase { .. } => ErrorKind::UnsupportedBase,
            SolveError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            SolveError::InsufficientData { .. } => ErrorKind::InsufficientData,
            SolveError::AllTriplesDegenerate { .. } => ErrorKind::AllTriplesDegenerate,
            SolveError::Record { source, .. } => source.kind(),
        }
    }

    /// Process exit code used when this error reaches `main`.
    ///
    /// - 2: malformed input
    /// - 3: not enough evidence
    /// - 4: evidence present but no exact solution exists
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::InvalidInput | ErrorKind::InvalidDigit | ErrorKind::UnsupportedBase => 2,
            ErrorKind::InsufficientData => 3,
            ErrorKind::DivisionByZero | ErrorKind::AllTriplesDegenerate => 4,
        }
    }
}

/// What `main` reports: a message for stderr and the process exit code.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<SolveError> for AppError {
    fn from(err: SolveError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}
