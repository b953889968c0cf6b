//! This module provides the byte stream abstraction the decoders read from.
//!
//! A `Tokenizer` only ever moves forward, so sources that can't seek
//! (pipes, network streams) work just as well as files.

mod slice;
pub use slice::*;
#[cfg(feature = "std")]
mod reader;
#[cfg(feature = "std")]
pub use reader::*;
#[cfg(all(test, feature = "std"))]
mod test;

use crate::read::Error;

/// A sequential source of bytes with a known absolute position.
///
/// All methods fail with `Error::TruncatedStream` if the source ends too early.
pub trait Tokenizer {
    /// Absolute offset of the next byte that will be read.
    fn position(&self) -> u64;

    /// Fill `buf` entirely and advance past it.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error>;

    /// Fill `buf` entirely without advancing.
    fn peek_exact(&mut self, buf: &mut [u8]) -> Result<(), Error>;

    /// Advance by `len` bytes without looking at them.
    fn ignore(&mut self, len: u64) -> Result<(), Error>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &mut T {
    fn position(&self) -> u64 {
        return (**self).position();
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        return (**self).read_exact(buf);
    }

    fn peek_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        return (**self).peek_exact(buf);
    }

    fn ignore(&mut self, len: u64) -> Result<(), Error> {
        return (**self).ignore(len);
    }
}
