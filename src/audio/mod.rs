//! Audio Processing Module
//!
//! Parses WAV containers at the byte level and downmixes their samples into
//! 8-bit unsigned audio tables.

pub mod convert;
pub mod wav;

pub use convert::{AudioOutcome, convert_wav};
pub use wav::{ByteReader, WavHeader};
