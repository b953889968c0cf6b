use super::Tokenizer;
use crate::read::Error;

use core::convert::TryFrom;

/// Reads tokens from a byte slice that is already in memory.
#[derive(Debug, Clone)]
pub struct SliceTokenizer<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> SliceTokenizer<'a> {
    pub fn new(data: &'a [u8]) -> SliceTokenizer<'a> {
        return SliceTokenizer { data, offset: 0 };
    }

    /// The bytes that haven't been consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        return &self.data[self.offset..];
    }

    fn truncated(&self, needed: u64) -> Error {
        return Error::TruncatedStream {
            needed,
            position: self.position(),
        };
    }
}

impl<'a> Tokenizer for SliceTokenizer<'a> {
    fn position(&self) -> u64 {
        return self.offset as u64;
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.peek_exact(buf)?;
        self.offset += buf.len();
        return Ok(());
    }

    fn peek_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let remaining = self.remaining();
        if remaining.len() < buf.len() {
            return Err(self.truncated(buf.len() as u64));
        }
        buf.copy_from_slice(&remaining[..buf.len()]);
        return Ok(());
    }

    fn ignore(&mut self, len: u64) -> Result<(), Error> {
        let len_usize = match usize::try_from(len) {
            Ok(l) if l <= self.remaining().len() => l,
            _ => return Err(self.truncated(len)),
        };
        self.offset += len_usize;
        return Ok(());
    }
}
