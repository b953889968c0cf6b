//! This module provides the top-level error type for this crate.

use crate::parser::ParserError;

use alloc::string::String;
use core::convert::From;
use core::fmt;

/// The top-level error type for this crate.
///
/// Every variant is fatal, a failed decode never hands out a partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The stream ended before `needed` more bytes could be read at `position`.
    TruncatedStream { needed: u64, position: u64 },
    /// The file didn't start with the chunk ID its format requires.
    UnexpectedContainerKind([u8; 4]),
    /// A chunk declared a size too small for what it must contain.
    InvalidChunkSize { id: [u8; 4], size: u64 },
    /// The metadata pointer lies behind the current position.
    InvalidOffset { pointer: u64, position: u64 },
    /// The format chunk declared a sample rate of zero.
    InvalidFormatChunk,
    Parser(ParserError),
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
    /// Reported by a `SecondaryTagDecoder`.
    SecondaryTag(String),
}

impl From<ParserError> for Error {
    fn from(e: ParserError) -> Self {
        return Error::Parser(e);
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TruncatedStream { needed, position } => write!(
                f,
                "stream ended while reading {} bytes at offset {}",
                needed, position
            ),
            Error::UnexpectedContainerKind(id) => {
                write!(f, "unexpected container chunk ID {:02x?}", id)
            }
            Error::InvalidChunkSize { id, size } => {
                write!(f, "chunk {:02x?} declares invalid size {}", id, size)
            }
            Error::InvalidOffset { pointer, position } => write!(
                f,
                "metadata pointer {} lies before current offset {}",
                pointer, position
            ),
            Error::InvalidFormatChunk => write!(f, "format chunk declares a sample rate of 0"),
            Error::Parser(e) => write!(f, "failed to parse token: {}", e),
            #[cfg(feature = "std")]
            Error::Io(kind) => write!(f, "I/O error: {:?}", kind),
            Error::SecondaryTag(msg) => write!(f, "secondary tag: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
