//! Error handling for the bn256 ecosystem

pub mod types;
pub mod traits;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

#[cfg(feature = "std")]
impl From<std::array::TryFromSliceError> for Error {
    fn from(_: std::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0,  // Unknown expected size
            actual: 0,    // Unknown actual size
        }
    }
}

#[cfg(feature = "std")]
use std::error::Error as StdError;

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl StdError for Error {}

/// Result of decoding a group element
pub type DecodeResult<T> = Result<T>;
