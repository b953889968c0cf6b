use core::convert::TryFrom;
use core::str;

pub const INFO_TAG_IDENT_SIZE_BYTES: usize = 4;
pub const INFO_TAG_FLAGS_SIZE_BYTES: usize = 4;
pub const INFO_TAG_FIELD_SIZE_BYTES: usize = 4;
pub const TOC_SIZE_BYTES: usize = 100;
pub const ENCODER_MARKER_SIZE_BYTES: usize = 4;
pub const ENCODER_INFO_SIZE_BYTES: usize = 9;

pub const ENCODER_MARKER: [u8; ENCODER_MARKER_SIZE_BYTES] = *b"LAME";

/// Bit positions within the flag word, counted from the least significant bit.
pub const FRAMES_FLAG_BIT: usize = 31;
pub const BYTES_FLAG_BIT: usize = 30;
pub const TOC_FLAG_BIT: usize = 29;
pub const VBR_SCALE_FLAG_BIT: usize = 28;

/// The identifier in front of the flag word.
///
/// Encoders write `Xing` for VBR streams and `Info` for CBR streams,
/// the layout that follows is the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTagKind {
    Xing,
    Info,
}

impl TryFrom<[u8; INFO_TAG_IDENT_SIZE_BYTES]> for InfoTagKind {
    type Error = ();
    fn try_from(ident: [u8; INFO_TAG_IDENT_SIZE_BYTES]) -> Result<Self, Self::Error> {
        match &ident {
            b"Xing" => Ok(InfoTagKind::Xing),
            b"Info" => Ok(InfoTagKind::Info),
            _ => Err(()),
        }
    }
}

/// Which optional fields follow the flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InfoTagFlags {
    pub frames: bool,
    pub bytes: bool,
    pub toc: bool,
    pub vbr_scale: bool,
}

impl InfoTagFlags {
    /// Number of bytes the flagged fields occupy after the flag word.
    pub fn fields_len(&self) -> usize {
        let mut len = 0;
        if self.frames {
            len += INFO_TAG_FIELD_SIZE_BYTES;
        }
        if self.bytes {
            len += INFO_TAG_FIELD_SIZE_BYTES;
        }
        if self.toc {
            len += TOC_SIZE_BYTES;
        }
        if self.vbr_scale {
            len += INFO_TAG_FIELD_SIZE_BYTES;
        }
        return len;
    }
}

/// The encoder identification record following the info tag.
///
/// The raw bytes start with the `LAME` marker itself,
/// so only the last 5 bytes carry the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderInfo {
    pub raw: [u8; ENCODER_INFO_SIZE_BYTES],
}

impl EncoderInfo {
    pub fn as_bytes(&self) -> &[u8] {
        return &self.raw;
    }

    /// The whole record as text, if it's valid ASCII.
    pub fn as_str(&self) -> Option<&str> {
        if !self.raw.is_ascii() {
            return None;
        }
        return str::from_utf8(&self.raw).ok();
    }

    /// The version part after the marker, e.g. `3.99r` or `3.100`.
    pub fn version(&self) -> &[u8] {
        let mut version = &self.raw[ENCODER_MARKER_SIZE_BYTES..];
        while let [rest @ .., 0 | b' '] = version {
            version = rest;
        }
        return version;
    }
}

/// A decoded Xing/Info tag.
///
/// Every field is only present if the flag word announced it,
/// except `encoder` which depends on the bytes following the tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InfoTag {
    /// Total number of frames in the stream.
    pub frame_count: Option<u32>,
    /// Size of the audio stream in bytes.
    pub stream_size: Option<u32>,
    /// Seek table, 100 entries of one byte each.
    pub toc: Option<[u8; TOC_SIZE_BYTES]>,
    /// Encoder quality indicator, 0 (best) to 100.
    pub vbr_scale: Option<u32>,
    pub encoder: Option<EncoderInfo>,
}

impl InfoTag {
    /// Play time in seconds, derived from the frame count.
    ///
    /// `samples_per_frame` and `sample_rate` come from the MPEG frame header the tag lives in.
    pub fn duration(&self, samples_per_frame: u32, sample_rate: u32) -> Option<f64> {
        if sample_rate == 0 {
            return None;
        }
        let frames = self.frame_count?;
        return Some(frames as f64 * samples_per_frame as f64 / sample_rate as f64);
    }
}
