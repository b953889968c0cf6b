use super::*;

pub fn chunk_header(input: &[u8]) -> MetaResult<ChunkHeader> {
    let (input, id) = context("chunk_header id", four_cc)(input)?;
    let (input, size) = context("chunk_header size", le_u64)(input)?;
    return Ok((input, ChunkHeader { id, size }));
}

pub fn dsd_chunk(input: &[u8]) -> MetaResult<DsdChunk> {
    let (input, file_size) = context("dsd_chunk file_size", le_u64)(input)?;
    let (input, metadata_pointer) = context("dsd_chunk metadata_pointer", le_u64)(input)?;
    return Ok((
        input,
        DsdChunk {
            file_size,
            metadata_pointer,
        },
    ));
}

pub fn format_chunk(input: &[u8]) -> MetaResult<FormatChunk> {
    let (input, format_version) = context("format_chunk format_version", le_u32)(input)?;
    let (input, format_id) = context("format_chunk format_id", le_u32)(input)?;
    let (input, channel_type) = context("format_chunk channel_type", le_u32)(input)?;
    let (input, channel_count) = context("format_chunk channel_count", le_u32)(input)?;
    let (input, sample_rate) = context("format_chunk sample_rate", le_u32)(input)?;
    let (input, bits_per_sample) = context("format_chunk bits_per_sample", le_u32)(input)?;
    let (input, sample_count) = context("format_chunk sample_count", le_u64)(input)?;
    let (input, block_size_per_channel) =
        context("format_chunk block_size_per_channel", le_u32)(input)?;
    let (input, reserved) = context("format_chunk reserved", le_u32)(input)?;
    return Ok((
        input,
        FormatChunk {
            format_version,
            format_id,
            channel_type,
            channel_count,
            sample_rate,
            bits_per_sample,
            sample_count,
            block_size_per_channel,
            reserved,
        },
    ));
}
