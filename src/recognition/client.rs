//! REST client for the Speech-to-Text service.

use super::models::{
    LongRunningRecognizeRequest, LongRunningRecognizeResponse, Operation, RecognitionAudio,
    RecognitionConfig,
};
use super::Recognizer;
use crate::config::RecognitionSettings;
use crate::error::{Result, TaleError};
use crate::storage::GcsUri;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Environment variable holding the service API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Default endpoint for the Speech-to-Text REST API.
const DEFAULT_ENDPOINT: &str = "https://speech.googleapis.com/v1p1beta1";

/// Timeout for individual HTTP requests. The recognition operation itself can
/// run far longer; it is bounded separately by the configured timeout.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Speech-to-Text API client using long-running recognition.
pub struct SpeechClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    config: RecognitionConfig,
    poll_interval: Duration,
    operation_timeout: Duration,
}

impl SpeechClient {
    /// Create a client from recognition settings, reading the API key from
    /// the environment.
    pub fn new(settings: &RecognitionSettings) -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                TaleError::Config(format!(
                    "{} not set. Set it with: export {}='...'",
                    API_KEY_VAR, API_KEY_VAR
                ))
            })?;

        Self::with_api_key(settings, api_key)
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(settings: &RecognitionSettings, api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
            config: RecognitionConfig {
                encoding: settings.encoding.clone(),
                sample_rate_hertz: settings.sample_rate_hertz,
                language_code: settings.language_code.clone(),
                enable_speaker_diarization: true,
                diarization_speaker_count: settings.diarization_speaker_count,
            },
            poll_interval: Duration::from_secs(settings.poll_interval_seconds),
            operation_timeout: Duration::from_secs(settings.timeout_seconds),
        })
    }

    /// Override the API endpoint (used by tests against a local server).
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Start a long-running recognition and return the operation name.
    #[instrument(skip(self), fields(uri = %audio))]
    async fn start_recognition(&self, audio: &GcsUri) -> Result<String> {
        debug!("Starting long-running recognition");

        let request = LongRunningRecognizeRequest {
            config: self.config.clone(),
            audio: RecognitionAudio {
                uri: audio.to_string(),
            },
        };

        let url = format!("{}/speech:longrunningrecognize", self.endpoint);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TaleError::Recognition(format!(
                "Recognition request failed ({}): {}",
                status, body
            )));
        }

        let operation: Operation = response.json().await?;
        info!(operation = %operation.name, "Recognition operation started");
        Ok(operation.name)
    }

    /// Fetch the current state of an operation.
    async fn fetch_operation(&self, name: &str) -> Result<Operation> {
        let url = format!("{}/operations/{}", self.endpoint, name);
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TaleError::Recognition(format!(
                "Operation poll failed ({}): {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Poll an operation until it completes or the configured timeout passes.
    #[instrument(skip(self))]
    async fn wait_for_operation(&self, name: &str) -> Result<LongRunningRecognizeResponse> {
        let deadline = Instant::now() + self.operation_timeout;

        loop {
            let operation = self.fetch_operation(name).await?;

            if operation.done {
                if let Some(error) = operation.error {
                    return Err(TaleError::Recognition(format!(
                        "Operation failed: {} (code {})",
                        error.message, error.code
                    )));
                }
                return operation.response.ok_or_else(|| {
                    TaleError::Recognition("Operation completed without a response".to_string())
                });
            }

            if Instant::now() >= deadline {
                return Err(TaleError::Recognition(format!(
                    "Operation {} did not complete within {}s",
                    name,
                    self.operation_timeout.as_secs()
                )));
            }

            debug!("Operation still running");
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[async_trait]
impl Recognizer for SpeechClient {
    async fn recognize(&self, audio: &GcsUri) -> Result<LongRunningRecognizeResponse> {
        let started = Instant::now();

        let name = self.start_recognition(audio).await?;
        let response = self.wait_for_operation(&name).await?;

        info!(
            elapsed_secs = started.elapsed().as_secs(),
            results = response.results.len(),
            "Recognition complete"
        );
        Ok(response)
    }
}

/// Check if the service API key is configured.
pub fn is_api_key_configured() -> bool {
    std::env::var(API_KEY_VAR).is_ok_and(|key| !key.is_empty())
}
