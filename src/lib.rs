#![forbid(unsafe_code)]
//! A crate for decoding metadata embedded in audio files, straight from a byte stream.
//! Currently understands the Xing/Info VBR tag of MPEG audio and the chunk layout of DSF files.
//! Nothing is ever written back.

#![no_std]
#![allow(clippy::needless_return)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod parser;
pub mod read;
pub mod tokenizer;

pub use parser::{
    ChannelType, ChunkHeader, DsdChunk, EncoderInfo, FormatChunk, InfoTag, InfoTagFlags,
    InfoTagKind, ParserError, ParserErrorKind,
};
