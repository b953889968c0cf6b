use super::Error;
use crate::tokenizer::Tokenizer;

/// A decoder for the tag block a container points to, e.g. the ID3v2 tag of a DSF file.
///
/// It's handed the tokenizer positioned exactly at the start of the block.
pub trait SecondaryTagDecoder {
    type Output;

    fn decode<T: Tokenizer + ?Sized>(&mut self, tokenizer: &mut T) -> Result<Self::Output, Error>;
}

/// Leaves the tag block alone. The caller only learns where it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipSecondaryTag;

impl SecondaryTagDecoder for SkipSecondaryTag {
    type Output = ();

    fn decode<T: Tokenizer + ?Sized>(&mut self, _tokenizer: &mut T) -> Result<(), Error> {
        return Ok(());
    }
}
