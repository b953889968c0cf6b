//! Low-level parsing of the structures embedded in audio files.
//!
//! `types` mirrors the on-disk layouts, `parsers` turns single tokens into those types.

pub mod err;
pub mod parsers;
pub mod types;

pub use err::*;
pub use types::*;
