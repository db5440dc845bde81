//! Wire models for the Speech-to-Text REST API.
//!
//! Field names follow the service's camelCase JSON. Word offsets arrive as
//! decimal-seconds strings with a trailing unit suffix, e.g. `"1.300s"`.

use serde::{Deserialize, Serialize};

/// Request body for `speech:longrunningrecognize`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongRunningRecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

/// Recognition parameters sent with every request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub encoding: String,
    pub sample_rate_hertz: u32,
    pub language_code: String,
    pub enable_speaker_diarization: bool,
    pub diarization_speaker_count: u32,
}

/// Audio reference. Tale always points the service at a storage object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionAudio {
    pub uri: String,
}

/// A long-running operation as returned by the operations endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub name: String,
    /// Omitted by the service while the operation is still running.
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<OperationError>,
    #[serde(default)]
    pub response: Option<LongRunningRecognizeResponse>,
}

/// Error payload of a failed operation.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// Completed recognition response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongRunningRecognizeResponse {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
}

/// One contiguous recognized portion of the audio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
}

impl SpeechRecognitionResult {
    /// Best (first) alternative, if the service returned any.
    pub fn best_alternative(&self) -> Option<&SpeechRecognitionAlternative> {
        self.alternatives.first()
    }

    /// Whether this result's best alternative carries speaker-tagged words.
    ///
    /// Only such results can be segmented into per-speaker phrases; the
    /// service also returns untagged interim results, which are skipped.
    pub fn has_speaker_tags(&self) -> bool {
        self.best_alternative()
            .and_then(|alt| alt.words.first())
            .is_some_and(|word| word.speaker_tag.is_some())
    }
}

/// A candidate transcription with word-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRecognitionAlternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub words: Vec<WordInfo>,
}

/// One recognized word with timing and speaker attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInfo {
    pub word: String,
    /// Offset from the start of the audio, e.g. `"1.300s"`.
    pub start_time: String,
    /// Offset of the end of the word, same format as `start_time`.
    pub end_time: String,
    /// Diarization speaker identifier; absent on untagged results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_tag: Option<i32>,
}
