use alloc::vec::Vec;
use core::fmt;
use nom::error::*;

/// The types of errors that may be returned by the token parsers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParserErrorKind {
    Nom(nom::error::ErrorKind),
    // UnknownInfoTagKind(ident)
    UnknownInfoTagKind([u8; 4]),
}

/// The error type returned by all token parsers.
///
/// Unlike a typical nom error this does not keep the offending input around,
/// because tokens are read into short-lived buffers that don't outlive the parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    /// What kind of error this is
    pub kind: ParserErrorKind,
    /// All the context we have accumulated from previous errors, innermost first.
    pub ctx: Vec<&'static str>,
}

impl<I> ParseError<I> for ParserError {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        return ParserError::new(ParserErrorKind::Nom(kind));
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I> ContextError<I> for ParserError {
    fn add_context(_input: I, ctx: &'static str, mut other: Self) -> Self {
        other.ctx.push(ctx);
        return other;
    }
}

impl ParserError {
    /// Creates a new error.
    pub fn new(kind: ParserErrorKind) -> Self {
        return ParserError {
            kind,
            ctx: Vec::new(),
        };
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ParserErrorKind::Nom(kind) => write!(f, "{}", kind.description())?,
            ParserErrorKind::UnknownInfoTagKind(ident) => {
                write!(f, "unknown info tag identifier {:02x?}", ident)?
            }
        }
        for ctx in self.ctx.iter() {
            write!(f, " (in {})", ctx)?;
        }
        return Ok(());
    }
}
