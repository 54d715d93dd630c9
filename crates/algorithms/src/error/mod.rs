//! Error handling for curve and pairing primitives

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use std::string::ToString;

use bn256_api::{Error as CoreError, Result as CoreResult};

/// The error type for curve and pairing primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Encoded point or field element rejected during decoding
    Point {
        /// Group or field being decoded
        context: &'static str,
        /// Why the encoding was rejected
        reason: &'static str,
    },

    /// The caller-supplied random source failed
    Entropy {
        /// Operation that requested randomness
        context: &'static str,
    },

    /// Processing error during a primitive operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }

    /// Shorthand to create a malformed point error
    pub fn point(context: &'static str, reason: &'static str) -> Self {
        Error::Point { context, reason }
    }
}

/// Result type for curve and pairing primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "{}: not enough data: expected {}, got {}",
                    context, expected, actual)
            },
            Error::Point { context, reason } => {
                write!(f, "{}: {}", context, reason)
            },
            Error::Entropy { context } => {
                write!(f, "Random source failed during {}", context)
            },
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            },
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Point { context, reason } => CoreError::InvalidPoint {
                context,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Entropy { context } => CoreError::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message: "random source failed".to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use bn256_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
