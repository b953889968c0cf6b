use core::convert::TryFrom;
use core::str;

/// 4 byte chunk ID followed by a 64 bit chunk size.
pub const CHUNK_HEADER_SIZE_BYTES: usize = 4 + 8;
pub const DSD_CHUNK_BODY_SIZE_BYTES: usize = 8 + 8;
pub const FORMAT_CHUNK_BODY_SIZE_BYTES: usize = 6 * 4 + 8 + 4 + 4;

pub const DSD_CHUNK_ID: [u8; 4] = *b"DSD ";
pub const FMT_CHUNK_ID: [u8; 4] = *b"fmt ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    /// Size of the whole chunk, header included.
    pub size: u64,
}

impl ChunkHeader {
    /// Size of the chunk without its header,
    /// or `None` if the declared size can't even hold the header.
    pub fn payload_size(&self) -> Option<u64> {
        return self.size.checked_sub(CHUNK_HEADER_SIZE_BYTES as u64);
    }

    /// The chunk ID for display purposes.
    pub fn id_str(&self) -> &str {
        return str::from_utf8(&self.id).unwrap_or("????");
    }
}

/// The record following the `DSD ` chunk header at the very start of a DSF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsdChunk {
    pub file_size: u64,
    /// Absolute offset of the ID3v2 tag, 0 if there is none.
    pub metadata_pointer: u64,
}

/// Payload of the `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatChunk {
    pub format_version: u32,
    /// 0 means raw DSD, nothing else is defined.
    pub format_id: u32,
    pub channel_type: u32,
    pub channel_count: u32,
    pub sample_rate: u32,
    /// 1 if sample data is stored LSB first, 8 if MSB first.
    pub bits_per_sample: u32,
    /// Samples per channel.
    pub sample_count: u64,
    pub block_size_per_channel: u32,
    pub reserved: u32,
}

impl FormatChunk {
    /// Play time in seconds. `None` for a zero sample rate.
    pub fn duration_seconds(&self) -> Option<f64> {
        if self.sample_rate == 0 {
            return None;
        }
        return Some(self.sample_count as f64 / self.sample_rate as f64);
    }

    pub fn channel_layout(&self) -> Option<ChannelType> {
        return ChannelType::try_from(self.channel_type).ok();
    }
}

/// Speaker layouts a DSF file may declare.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelType {
    Mono = 1,
    Stereo = 2,
    ThreeChannels = 3,
    Quad = 4,
    FourChannels = 5,
    FiveChannels = 6,
    FivePointOne = 7,
}

impl TryFrom<u32> for ChannelType {
    type Error = ();
    fn try_from(v: u32) -> Result<Self, Self::Error> {
        use ChannelType::*;
        match v {
            1 => Ok(Mono),
            2 => Ok(Stereo),
            3 => Ok(ThreeChannels),
            4 => Ok(Quad),
            5 => Ok(FourChannels),
            6 => Ok(FiveChannels),
            7 => Ok(FivePointOne),
            _ => Err(()),
        }
    }
}
