//! Glue between the tokenizer and the nom parsers.

use super::Error;
use crate::parser::parsers::MetaResult;
use crate::parser::{ParserError, ParserErrorKind};
use crate::tokenizer::Tokenizer;

/// Fill `buf` from the tokenizer and run `parser` over it.
///
/// The buffer's length is the token's length.
pub(crate) fn read_token<T, O, P>(tokenizer: &mut T, buf: &mut [u8], parser: P) -> Result<O, Error>
where
    T: Tokenizer + ?Sized,
    P: FnMut(&[u8]) -> MetaResult<'_, O>,
{
    tokenizer.read_exact(buf)?;
    return parse_token(buf, parser);
}

fn parse_token<O, P>(buf: &[u8], mut parser: P) -> Result<O, Error>
where
    P: FnMut(&[u8]) -> MetaResult<'_, O>,
{
    match parser(buf) {
        Ok((_, res)) => return Ok(res),
        Err(e) => match e {
            // Tokens are always complete, but don't panic on a misbehaving parser.
            nom::Err::Incomplete(_) => {
                return Err(Error::Parser(ParserError::new(ParserErrorKind::Nom(
                    nom::error::ErrorKind::Complete,
                ))))
            }
            nom::Err::Error(e) => return Err(Error::Parser(e)),
            nom::Err::Failure(e) => return Err(Error::Parser(e)),
        },
    }
}
