//! Streaming decoder for the Xing/Info tag found in the first frame of MPEG audio.

use super::token::read_token;
use super::Error;
use crate::parser::parsers;
use crate::parser::types::*;
use crate::tokenizer::Tokenizer;

use core::convert::TryFrom;
use log::{debug, trace};

/// Decode an info tag, starting at its flag word.
///
/// Consumes the flag word, the fields it announces and, if the next bytes are
/// the `LAME` marker, the 9 byte encoder record. Nothing else is touched.
pub fn read_info_tag<T: Tokenizer + ?Sized>(tokenizer: &mut T) -> Result<InfoTag, Error> {
    let start = tokenizer.position();
    let flags = read_token(
        tokenizer,
        &mut [0u8; INFO_TAG_FLAGS_SIZE_BYTES],
        parsers::info_tag_flags,
    )?;
    trace!(
        "info tag flags at offset={}: {:?}, {} bytes of fields",
        start,
        flags,
        flags.fields_len()
    );

    let mut tag = InfoTag::default();
    if flags.frames {
        tag.frame_count = Some(read_token(
            tokenizer,
            &mut [0u8; INFO_TAG_FIELD_SIZE_BYTES],
            parsers::frame_count,
        )?);
    }
    if flags.bytes {
        tag.stream_size = Some(read_token(
            tokenizer,
            &mut [0u8; INFO_TAG_FIELD_SIZE_BYTES],
            parsers::stream_size,
        )?);
    }
    if flags.toc {
        tag.toc = Some(read_token(
            tokenizer,
            &mut [0u8; TOC_SIZE_BYTES],
            parsers::toc,
        )?);
    }
    if flags.vbr_scale {
        tag.vbr_scale = Some(read_token(
            tokenizer,
            &mut [0u8; INFO_TAG_FIELD_SIZE_BYTES],
            parsers::vbr_scale,
        )?);
    }
    tag.encoder = read_encoder_info(tokenizer)?;

    debug!(
        "info tag decoded from {} bytes, encoder={:?}",
        tokenizer.position() - start,
        tag.encoder.as_ref().and_then(|e| e.as_str())
    );
    return Ok(tag);
}

/// Decode an info tag preceded by its `Xing` or `Info` identifier.
///
/// Returns `None` without consuming anything if the identifier isn't there.
pub fn read_info_tag_frame<T: Tokenizer + ?Sized>(
    tokenizer: &mut T,
) -> Result<Option<(InfoTagKind, InfoTag)>, Error> {
    let ident = match peek_ident(tokenizer)? {
        Some(ident) => ident,
        None => return Ok(None),
    };
    if InfoTagKind::try_from(ident).is_err() {
        trace!("no info tag, found {:02x?}", ident);
        return Ok(None);
    }

    let kind = read_token(
        tokenizer,
        &mut [0u8; INFO_TAG_IDENT_SIZE_BYTES],
        parsers::info_tag_kind,
    )?;
    let tag = read_info_tag(tokenizer)?;
    return Ok(Some((kind, tag)));
}

/// Look at the next 4 bytes. A stream too short to hold them has no identifier there.
fn peek_ident<T: Tokenizer + ?Sized>(tokenizer: &mut T) -> Result<Option<[u8; 4]>, Error> {
    let mut ident = [0u8; 4];
    match tokenizer.peek_exact(&mut ident) {
        Ok(()) => return Ok(Some(ident)),
        Err(Error::TruncatedStream { .. }) => return Ok(None),
        Err(e) => return Err(e),
    }
}

fn read_encoder_info<T: Tokenizer + ?Sized>(
    tokenizer: &mut T,
) -> Result<Option<EncoderInfo>, Error> {
    match peek_ident(tokenizer)? {
        Some(marker) if marker == ENCODER_MARKER => {}
        _ => return Ok(None),
    }
    let info = read_token(
        tokenizer,
        &mut [0u8; ENCODER_INFO_SIZE_BYTES],
        parsers::encoder_info,
    )?;
    return Ok(Some(info));
}
