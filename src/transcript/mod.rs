//! Transcript assembly for Tale.
//!
//! Turns the recognizer's flat, speaker-tagged word list into per-speaker
//! phrases and writes them to disk.

mod segmenter;
mod speakers;
mod writer;

pub use segmenter::{parse_offset, phrases, Phrase};
pub use speakers::SpeakerNames;
pub use writer::{format_offset, TranscriptWriter};
