//! This module provides a "simplistic" API for reading metadata.
//!
//! It trades off precise control for ease of use.

use super::dsf::{DsfInfo, DsfReader};
use super::info_tag::read_info_tag;
use super::Error;
use crate::parser::InfoTag;
use crate::tokenizer::SliceTokenizer;

/// Decode an info tag from a buffer starting at the tag's flag word.
pub fn info_tag_from_bytes(data: &[u8]) -> Result<InfoTag, Error> {
    let mut tokenizer = SliceTokenizer::new(data);
    return read_info_tag(&mut tokenizer);
}

/// Decode a DSF file held in memory with the default options.
pub fn dsf_from_bytes(data: &[u8]) -> Result<DsfInfo, Error> {
    let mut tokenizer = SliceTokenizer::new(data);
    return DsfReader::new().decode(&mut tokenizer);
}

/// Decode a DSF file from a reader with the default options.
///
/// The reader doesn't need to be seekable, it's only ever read forward
/// and only as far as the start of the ID3v2 tag.
#[cfg(feature = "std")]
pub fn dsf_from_reader<R: std::io::Read>(reader: R) -> Result<DsfInfo, Error> {
    let mut tokenizer = crate::tokenizer::ReaderTokenizer::new(reader);
    return DsfReader::new().decode(&mut tokenizer);
}
