//! Traits for byte serialization of group elements.

use crate::error::DecodeResult;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Fixed-width, big-endian encoding of a group element.
///
/// Decoding consumes exactly `SIZE` bytes from the front of the input and
/// hands back whatever follows, so several elements can be read from one
/// buffer in sequence.
pub trait Marshal: Sized {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Encodes the element into a freshly allocated buffer of `SIZE` bytes.
    #[cfg(feature = "alloc")]
    fn marshal(&self) -> Vec<u8>;

    /// Decodes one element from the front of `bytes`, returning it together
    /// with the unconsumed tail.
    fn unmarshal(bytes: &[u8]) -> DecodeResult<(Self, &[u8])>;
}
