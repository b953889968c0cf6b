use bitvec::prelude::*;

/// Tests a single bit of a 32 bit word, bit 0 being the least significant one.
///
/// Bits past the word's width read as unset.
pub fn is_bit_set(word: u32, bit: usize) -> bool {
    return match word.view_bits::<Lsb0>().get(bit) {
        Some(b) => *b,
        None => false,
    };
}
