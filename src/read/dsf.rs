//! Streaming decoder for DSF (DSD Stream File) containers.
//!
//! A DSF file is a `DSD ` chunk, a `fmt ` chunk, a `data` chunk and an optional
//! ID3v2 tag at the end, which the `DSD ` chunk points to by absolute offset.

use super::secondary::{SecondaryTagDecoder, SkipSecondaryTag};
use super::token::read_token;
use super::Error;
use crate::parser::parsers;
use crate::parser::types::*;
use crate::tokenizer::Tokenizer;

use either::*;
use log::{debug, trace, warn};

pub const DEFAULT_MAX_CHUNKS: usize = 16;

/// How far to look for the `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkWalk {
    /// Dispatch exactly one chunk after the `DSD ` chunk.
    /// Only finds the format if it comes first, which well-formed files guarantee.
    SingleStep,
    /// Keep dispatching chunks until the format is found, `max_chunks` chunks were seen,
    /// or the next header wouldn't fit before the metadata (or the end of file, if there's no metadata).
    /// At least one chunk is always dispatched.
    UntilFormat { max_chunks: usize },
}

impl Default for ChunkWalk {
    fn default() -> Self {
        return ChunkWalk::UntilFormat {
            max_chunks: DEFAULT_MAX_CHUNKS,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DsfOptions {
    pub chunk_walk: ChunkWalk,
}

/// Everything learned from a DSF file apart from the secondary tag itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DsfInfo {
    pub dsd: DsdChunk,
    pub format: Option<FormatChunk>,
    /// Where the ID3v2 tag starts, if the file has one.
    pub metadata_offset: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct DsfReader {
    options: DsfOptions,
}

impl DsfReader {
    pub fn new() -> DsfReader {
        return DsfReader::default();
    }

    pub fn with_options(options: DsfOptions) -> DsfReader {
        return DsfReader { options };
    }

    /// Decode the container, leaving the tokenizer at the ID3v2 tag if there is one.
    pub fn decode<T: Tokenizer + ?Sized>(&self, tokenizer: &mut T) -> Result<DsfInfo, Error> {
        let (info, _) = self.decode_with(tokenizer, &mut SkipSecondaryTag)?;
        return Ok(info);
    }

    /// Decode the container and hand the ID3v2 tag, if any, to `secondary`.
    ///
    /// `secondary` is not called at all for files without a tag.
    pub fn decode_with<T, D>(
        &self,
        tokenizer: &mut T,
        secondary: &mut D,
    ) -> Result<(DsfInfo, Option<D::Output>), Error>
    where
        T: Tokenizer + ?Sized,
        D: SecondaryTagDecoder,
    {
        let header = read_token(
            tokenizer,
            &mut [0u8; CHUNK_HEADER_SIZE_BYTES],
            parsers::chunk_header,
        )?;
        if header.id != DSD_CHUNK_ID {
            return Err(Error::UnexpectedContainerKind(header.id));
        }
        if header.payload_size().is_none() {
            return Err(Error::InvalidChunkSize {
                id: header.id,
                size: header.size,
            });
        }
        let dsd = read_token(
            tokenizer,
            &mut [0u8; DSD_CHUNK_BODY_SIZE_BYTES],
            parsers::dsd_chunk,
        )?;
        trace!(
            "DSD chunk: file_size={} metadata_pointer={}",
            dsd.file_size,
            dsd.metadata_pointer
        );

        if dsd.metadata_pointer == 0 {
            debug!("No ID3v2 tag present");
            let format = self.walk_chunks(tokenizer, dsd.file_size)?;
            let info = DsfInfo {
                dsd,
                format,
                metadata_offset: None,
            };
            return Ok((info, None));
        }

        debug!("expect ID3v2 at offset={}", dsd.metadata_pointer);
        let format = self.walk_chunks(tokenizer, dsd.metadata_pointer)?;

        let position = tokenizer.position();
        let skip = match dsd.metadata_pointer.checked_sub(position) {
            Some(skip) => skip,
            None => {
                return Err(Error::InvalidOffset {
                    pointer: dsd.metadata_pointer,
                    position,
                })
            }
        };
        tokenizer.ignore(skip)?;
        let tag = secondary.decode(tokenizer)?;

        let info = DsfInfo {
            dsd,
            format,
            metadata_offset: Some(dsd.metadata_pointer),
        };
        return Ok((info, Some(tag)));
    }

    /// Dispatch chunks according to the configured `ChunkWalk`.
    ///
    /// `limit` is the offset no chunk header after the first may extend past.
    fn walk_chunks<T: Tokenizer + ?Sized>(
        &self,
        tokenizer: &mut T,
        limit: u64,
    ) -> Result<Option<FormatChunk>, Error> {
        let max_chunks = match self.options.chunk_walk {
            ChunkWalk::SingleStep => {
                return match dispatch_chunk(tokenizer)? {
                    Right(format) => Ok(Some(format)),
                    Left(_) => Ok(None),
                };
            }
            ChunkWalk::UntilFormat { max_chunks } => max_chunks,
        };

        // The first chunk is dispatched no matter what the limit claims.
        for seen in 0..max_chunks.max(1) {
            if seen > 0 && tokenizer.position() + CHUNK_HEADER_SIZE_BYTES as u64 > limit {
                trace!("no room for another chunk before offset={}", limit);
                return Ok(None);
            }
            if let Right(format) = dispatch_chunk(tokenizer)? {
                return Ok(Some(format));
            }
        }
        warn!("no format chunk within the first {} chunks", max_chunks.max(1));
        return Ok(None);
    }
}

/// Read one chunk header and either decode the chunk, if it's the format chunk,
/// or skip over it.
fn dispatch_chunk<T: Tokenizer + ?Sized>(
    tokenizer: &mut T,
) -> Result<Either<ChunkHeader, FormatChunk>, Error> {
    let header = read_token(
        tokenizer,
        &mut [0u8; CHUNK_HEADER_SIZE_BYTES],
        parsers::chunk_header,
    )?;
    debug!("Parsing chunk name={} size={}", header.id_str(), header.size);
    let invalid_size = Error::InvalidChunkSize {
        id: header.id,
        size: header.size,
    };
    let payload_size = match header.payload_size() {
        Some(size) => size,
        None => return Err(invalid_size),
    };

    if header.id != FMT_CHUNK_ID {
        trace!("skipping {} bytes of {}", payload_size, header.id_str());
        tokenizer.ignore(payload_size)?;
        return Ok(Left(header));
    }

    let trailing = match payload_size.checked_sub(FORMAT_CHUNK_BODY_SIZE_BYTES as u64) {
        Some(trailing) => trailing,
        None => return Err(invalid_size),
    };
    let format = read_token(
        tokenizer,
        &mut [0u8; FORMAT_CHUNK_BODY_SIZE_BYTES],
        parsers::format_chunk,
    )?;
    if format.sample_rate == 0 {
        return Err(Error::InvalidFormatChunk);
    }
    if format.channel_layout().is_none() {
        warn!("unknown channel type {}", format.channel_type);
    }
    tokenizer.ignore(trailing)?;
    return Ok(Right(format));
}
