use super::Tokenizer;
use crate::read::Error;

use alloc::vec::Vec;
use core::cmp::min;
use std::io::{self, Read};

/// Reads tokens from any `std::io::Read`.
///
/// Peeked bytes are buffered until they're consumed, and skipping is done by reading and
/// discarding, so the reader never has to support seeking.
#[derive(Debug)]
pub struct ReaderTokenizer<R> {
    inner: R,
    peeked: Vec<u8>,
    position: u64,
}

impl<R: Read> ReaderTokenizer<R> {
    pub fn new(inner: R) -> ReaderTokenizer<R> {
        return ReaderTokenizer {
            inner,
            peeked: Vec::new(),
            position: 0,
        };
    }

    /// Give back the underlying reader.
    ///
    /// Bytes that were peeked but not consumed are lost.
    pub fn into_inner(self) -> R {
        return self.inner;
    }

    fn truncated(&self, needed: u64) -> Error {
        return Error::TruncatedStream {
            needed,
            position: self.position,
        };
    }
}

/// Read until `buf` is full or the reader runs dry.
///
/// `filled` counts the bytes read so far, and stays valid when an error is returned.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8], filled: &mut usize) -> Result<(), Error> {
    while *filled < buf.len() {
        match reader.read(&mut buf[*filled..]) {
            Ok(0) => break,
            Ok(n) => *filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Io(e.kind())),
        }
    }
    return Ok(());
}

impl<R: Read> Tokenizer for ReaderTokenizer<R> {
    fn position(&self) -> u64 {
        return self.position;
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let from_peeked = min(buf.len(), self.peeked.len());
        buf[..from_peeked].copy_from_slice(&self.peeked[..from_peeked]);
        self.peeked.drain(..from_peeked);

        let mut filled = 0;
        let res = fill(&mut self.inner, &mut buf[from_peeked..], &mut filled);
        let filled = from_peeked + filled;
        self.position += filled as u64;
        res?;
        if filled < buf.len() {
            return Err(self.truncated(buf.len() as u64));
        }
        return Ok(());
    }

    fn peek_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let buffered = self.peeked.len();
        if buffered < buf.len() {
            self.peeked.resize(buf.len(), 0);
            let mut filled = 0;
            let res = fill(&mut self.inner, &mut self.peeked[buffered..], &mut filled);
            // Drop the padding, keep whatever arrived before a failure.
            self.peeked.truncate(buffered + filled);
            res?;
            if self.peeked.len() < buf.len() {
                return Err(self.truncated(buf.len() as u64));
            }
        }
        buf.copy_from_slice(&self.peeked[..buf.len()]);
        return Ok(());
    }

    fn ignore(&mut self, len: u64) -> Result<(), Error> {
        let from_peeked = min(len, self.peeked.len() as u64) as usize;
        self.peeked.drain(..from_peeked);
        self.position += from_peeked as u64;

        let rest = len - from_peeked as u64;
        let skipped = match io::copy(&mut (&mut self.inner).take(rest), &mut io::sink()) {
            Ok(n) => n,
            Err(e) => return Err(Error::Io(e.kind())),
        };
        self.position += skipped;
        if skipped < rest {
            return Err(self.truncated(len));
        }
        return Ok(());
    }
}
