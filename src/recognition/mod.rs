//! Remote speech recognition for Tale.
//!
//! Talks to the Google Speech-to-Text long-running recognition API and
//! exposes the structured, word-level response consumed by the segmenter.

mod client;
mod models;

pub use client::{is_api_key_configured, SpeechClient, API_KEY_VAR};
pub use models::{
    LongRunningRecognizeRequest, LongRunningRecognizeResponse, Operation, OperationError,
    RecognitionAudio, RecognitionConfig, SpeechRecognitionAlternative, SpeechRecognitionResult,
    WordInfo,
};

use crate::error::Result;
use crate::storage::GcsUri;
use async_trait::async_trait;

/// Trait for speech recognition services.
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Recognize the referenced audio and return the word-level response.
    async fn recognize(&self, audio: &GcsUri) -> Result<LongRunningRecognizeResponse>;
}
