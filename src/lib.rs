//! Tale - Diarized Audio Transcription
//!
//! A CLI tool for transcribing cloud-stored audio with speaker diarization.
//!
//! The name "Tale" comes from the Norwegian word for "speech."
//!
//! # Overview
//!
//! Tale allows you to:
//! - Transcribe audio files stored in Google Cloud Storage
//! - Distinguish speakers via the recognition service's diarization
//! - Render the word-level response as per-speaker phrase transcripts
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `storage` - Cloud storage references
//! - `recognition` - Remote speech recognition client
//! - `transcript` - Phrase segmentation, speaker naming, and file output
//!
//! # Example
//!
//! ```rust,no_run
//! use tale::config::Settings;
//! use tale::recognition::{Recognizer, SpeechClient};
//! use tale::storage::GcsUri;
//! use tale::transcript::TranscriptWriter;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let audio: GcsUri = "gs://bucket/interview.mp3".parse()?;
//!
//!     let client = SpeechClient::new(&settings.recognition)?;
//!     let response = client.recognize(&audio).await?;
//!
//!     let writer = TranscriptWriter::create(&settings.output_dir(), &audio)?;
//!     writer.save_response(&response)?;
//!     let saved = writer.save_transcripts(&response)?;
//!     println!("Wrote {} transcript(s)", saved.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod recognition;
pub mod storage;
pub mod transcript;

pub use error::{Result, TaleError};
