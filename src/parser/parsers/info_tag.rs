use super::*;

use core::convert::TryFrom;

pub fn info_tag_kind(input: &[u8]) -> MetaResult<InfoTagKind> {
    let (input, ident) = context("info_tag_kind ident", four_cc)(input)?;
    match InfoTagKind::try_from(ident) {
        Ok(kind) => return Ok((input, kind)),
        Err(_) => {
            return Err(nom::Err::Error(ParserError::new(
                ParserErrorKind::UnknownInfoTagKind(ident),
            )))
        }
    }
}

pub fn info_tag_flags(input: &[u8]) -> MetaResult<InfoTagFlags> {
    let (input, word) = context("info_tag_flags word", be_u32)(input)?;
    return Ok((
        input,
        InfoTagFlags {
            frames: is_bit_set(word, FRAMES_FLAG_BIT),
            bytes: is_bit_set(word, BYTES_FLAG_BIT),
            toc: is_bit_set(word, TOC_FLAG_BIT),
            vbr_scale: is_bit_set(word, VBR_SCALE_FLAG_BIT),
        },
    ));
}

pub fn frame_count(input: &[u8]) -> MetaResult<u32> {
    return context("frame_count", be_u32)(input);
}

pub fn stream_size(input: &[u8]) -> MetaResult<u32> {
    return context("stream_size", be_u32)(input);
}

pub fn toc(input: &[u8]) -> MetaResult<[u8; TOC_SIZE_BYTES]> {
    let (input, raw) = context("toc", take(TOC_SIZE_BYTES))(input)?;
    let mut toc = [0; TOC_SIZE_BYTES];
    toc.copy_from_slice(raw);
    return Ok((input, toc));
}

pub fn vbr_scale(input: &[u8]) -> MetaResult<u32> {
    return context("vbr_scale", be_u32)(input);
}

pub fn encoder_info(input: &[u8]) -> MetaResult<EncoderInfo> {
    // Only checks the marker, it stays in the raw record.
    let (_, _marker) = context("encoder_info marker", tag(ENCODER_MARKER))(input)?;
    let (input, raw_slice) = context("encoder_info raw", take(ENCODER_INFO_SIZE_BYTES))(input)?;
    let mut raw = [0; ENCODER_INFO_SIZE_BYTES];
    raw.copy_from_slice(raw_slice);
    return Ok((input, EncoderInfo { raw }));
}
