//! Error type definitions for key management operations

use core::fmt;

/// Primary error type for key management operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The active provider cannot perform operations for this algorithm.
    ///
    /// Raised before any construction attempt; the capability is static
    /// for the lifetime of the provider, so callers should not retry.
    UnsupportedAlgorithm {
        algorithm: &'static str,
        context: &'static str,
    },

    /// Supplied bytes do not decode to a valid key
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The requested (encoding, format) pair is outside the validity matrix
    UnsupportedFormat {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Signature verification failed.
    ///
    /// Deliberately carries no detail: distinguishing a bad signature
    /// from a wrong key or tampered data would hand an oracle to callers.
    InvalidSignature,

    /// Not implemented error
    NotImplemented { feature: &'static str },
}

/// Result type for key management operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedAlgorithm { algorithm, context } => {
                write!(f, "{}: {} is not supported by this provider", context, algorithm)
            }
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::UnsupportedFormat { context, message } => {
                write!(f, "Unsupported format: {}: {}", context, message)
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter: {}: {}", context, message)
            }
            Self::SerializationError { context, message } => {
                write!(f, "Serialization error: {}: {}", context, message)
            }
            Self::InvalidSignature => {
                write!(f, "signature verification failed")
            }
            Self::NotImplemented { feature } => {
                write!(f, "{} is not implemented", feature)
            }
        }
    }
}

impl std::error::Error for Error {}
