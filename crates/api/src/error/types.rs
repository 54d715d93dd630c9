//! Error type definitions for curve and pairing operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for bn256 operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input was shorter (or otherwise sized differently) than the encoding requires
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Encoded point or field element failed validation
    InvalidPoint {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for bn256 operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidPoint { .. } => Self::InvalidPoint { context },
            #[cfg(feature = "std")]
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            #[cfg(feature = "std")]
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
            #[cfg(feature = "std")]
            Self::Other { message, .. } => Self::Other { context, message },
            #[cfg(not(feature = "std"))]
            Self::Other { .. } => Self::Other { context },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidLength { context, expected, actual } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidPoint { context, .. } => Self::InvalidPoint { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// The static context attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: not enough data (expected {}, got {})",
                    context, expected, actual)
            },
            #[cfg(feature = "std")]
            Self::InvalidPoint { context, message } => {
                write!(f, "Malformed point: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidPoint { context } => {
                write!(f, "Malformed point: {}", context)
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            },
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            },
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            },
        }
    }
}
