//! Structures embedded in audio files.
//! These are "low-level", meaning that they're meant to
//! reflect how data is stored in the file, not provide a friendly interface to it.

mod dsf;
mod info_tag;
pub use dsf::*;
pub use info_tag::*;
