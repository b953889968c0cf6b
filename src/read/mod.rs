//! This module implements the streaming decoders.
//!
//! Each decoder pulls exactly the bytes it needs from a `Tokenizer`
//! and leaves it positioned right after the structure it decoded.

mod dsf;
mod err;
mod info_tag;
mod secondary;
mod simplistic;
mod token;

pub use dsf::*;
pub use err::*;
pub use info_tag::*;
pub use secondary::*;
pub use simplistic::*;
