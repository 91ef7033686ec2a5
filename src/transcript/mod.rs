//! Transcript acquisition for lectern
//!
//! Transcripts come from a local text file or from YouTube captions.

mod youtube;

pub use youtube::TranscriptClient;
