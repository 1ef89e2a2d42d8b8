//! Error handling module.
//!
//! Every failure of a generation call is terminal: the call stops at the
//! first error and returns it. Values already written to the sink stay there.

pub mod codes;

pub use codes::{ErrorCategory, ErrorCode};

/// Generation error type.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Invalid configuration.
    #[error("{0}")]
    Configuration(String),

    /// A numeric token in the configuration could not be parsed.
    #[error("failed to parse number {token:?}: {source}")]
    InvalidNumber {
        /// The offending token, verbatim.
        token: String,
        /// Underlying parse failure.
        source: std::num::ParseIntError,
    },

    /// The randomness source failed.
    #[error("failed to read random bytes: {0}")]
    RandomnessSource(String),

    /// A ULID or UUID could not be constructed.
    #[error("failed to generate {kind}: {reason}")]
    IdConstruction {
        /// Identifier kind, e.g. `ULID` or `UUIDv7`.
        kind: &'static str,
        /// Why construction failed.
        reason: String,
    },

    /// Encoding a payload as base64 or hex failed.
    #[error("failed to encode value: {0}")]
    Encoding(String),

    /// Writing to the output sink failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl GenerateError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Configuration(_) => ErrorCode::INVALID_CONFIG,
            Self::InvalidNumber { .. } => ErrorCode::INVALID_NUMBER,
            Self::RandomnessSource(_) => ErrorCode::RANDOMNESS_SOURCE,
            Self::IdConstruction { .. } => ErrorCode::ID_CONSTRUCTION,
            Self::Encoding(_) => ErrorCode::ENCODING_ERROR,
            Self::Output(_) => ErrorCode::OUTPUT_ERROR,
        }
    }

    /// Get the process exit status for this error.
    ///
    /// Configuration problems exit with 2, everything else with 1.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self.error_code().category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Internal | ErrorCategory::Unknown => 1,
        }
    }
}

/// Result type alias using `GenerateError`.
pub type Result<T> = std::result::Result<T, GenerateError>;
