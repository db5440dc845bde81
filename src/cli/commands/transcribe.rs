//! Transcribe command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::recognition::{Recognizer, SpeechClient};
use crate::storage::GcsUri;
use crate::transcript::TranscriptWriter;
use anyhow::Result;

/// Run the transcribe command.
pub async fn run_transcribe(
    uri: &str,
    language: Option<String>,
    speakers: Option<u32>,
    output_dir: Option<String>,
    mut settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Transcribe) {
        Output::error(&format!("{}", e));
        Output::info("Run 'tale doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    // Apply CLI overrides
    if let Some(language) = language {
        settings.recognition.language_code = language;
    }
    if let Some(speakers) = speakers {
        settings.recognition.diarization_speaker_count = speakers;
    }
    if let Some(output_dir) = output_dir {
        settings.general.output_dir = output_dir;
    }

    let audio: GcsUri = uri.parse()?;

    Output::info(&format!("Transcribing: {}", audio));
    Output::kv("Language", &settings.recognition.language_code);
    Output::kv(
        "Speakers",
        &settings.recognition.diarization_speaker_count.to_string(),
    );

    let client = SpeechClient::new(&settings.recognition)?;

    let spinner = Output::spinner("Waiting for recognition to complete...");
    let response = match client.recognize(&audio).await {
        Ok(response) => {
            spinner.finish_and_clear();
            response
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Recognition failed: {}", e));
            return Err(e.into());
        }
    };

    if response.results.is_empty() {
        Output::warning("The service returned no recognition results.");
    }

    let writer = TranscriptWriter::create(&settings.output_dir(), &audio)?;
    let response_path = writer.save_response(&response)?;
    let transcripts = writer.save_transcripts(&response)?;

    Output::success(&format!(
        "Saved {} transcript(s) to {}",
        transcripts.len(),
        writer.dir().display()
    ));
    Output::list_item(&format!("{}", response_path.display()));
    for path in &transcripts {
        Output::list_item(&format!("{}", path.display()));
    }

    if transcripts.is_empty() && !response.results.is_empty() {
        Output::warning("No results carried speaker tags; only the raw response was saved.");
    }

    Ok(())
}
