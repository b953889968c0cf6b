//! Custom nom parsers for fixed-size tokens.
//!
//! Every parser here is handed a buffer holding exactly one token,
//! the streaming readers take care of fetching it.

mod bit;
pub use bit::*;
mod info_tag;
pub use info_tag::*;
mod dsf;
pub use dsf::*;

use super::err::*;
use super::types::*;

use nom::bytes::complete::{tag, take};
use nom::error::context;
use nom::number::complete::{be_u32, le_u32, le_u64};

/// Result type that all parsers return.
pub type MetaResult<'a, T> = nom::IResult<&'a [u8], T, ParserError>;

/// A 4 byte ASCII code as used for chunk IDs and tag identifiers.
pub fn four_cc(input: &[u8]) -> MetaResult<[u8; 4]> {
    let (input, raw) = context("four_cc", take(4usize))(input)?;
    let mut code = [0; 4];
    code.copy_from_slice(raw);
    return Ok((input, code));
}
