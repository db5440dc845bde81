//! Transcript file output.
//!
//! One transcription job writes a fresh directory containing the raw
//! recognition response plus one phrase transcript per speaker-tagged result.

use super::{phrases, Phrase, SpeakerNames};
use crate::error::Result;
use crate::recognition::LongRunningRecognizeResponse;
use crate::storage::GcsUri;
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// File name for the raw service response.
const RESPONSE_FILE: &str = "response-full.json";

/// Writes transcription output for a single job.
pub struct TranscriptWriter {
    dir: PathBuf,
}

impl TranscriptWriter {
    /// Create a writer with a fresh `gs-<name>-<timestamp>` directory under
    /// `root`.
    pub fn create(root: &Path, audio: &GcsUri) -> Result<Self> {
        let dir = root.join(format!(
            "gs-{}-{}",
            audio.encoded_file_name(),
            Utc::now().timestamp()
        ));
        fs::create_dir_all(&dir)?;

        debug!(dir = %dir.display(), "Created transcript directory");
        Ok(Self { dir })
    }

    /// Directory this writer outputs into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save the full raw recognition response as pretty-printed JSON.
    pub fn save_response(&self, response: &LongRunningRecognizeResponse) -> Result<PathBuf> {
        let path = self.dir.join(RESPONSE_FILE);
        let json = serde_json::to_string_pretty(response)?;
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Save per-speaker phrase transcripts, one file per speaker-tagged
    /// result.
    ///
    /// Results whose best alternative carries no speaker tags are skipped;
    /// without tags there is nothing to attribute phrases to. Returns the
    /// paths of the transcript files written, in result order.
    pub fn save_transcripts(
        &self,
        response: &LongRunningRecognizeResponse,
    ) -> Result<Vec<PathBuf>> {
        let mut speakers = SpeakerNames::new();
        let mut saved = Vec::new();

        for result in &response.results {
            if !result.has_speaker_tags() {
                continue;
            }
            let Some(alternative) = result.best_alternative() else {
                continue;
            };

            let path = self.dir.join(format!("transcript.{}.txt", saved.len()));
            let mut file = fs::File::create(&path)?;
            for phrase in phrases(&alternative.words, &mut speakers)? {
                writeln!(file, "{}", render_phrase(&phrase))?;
            }

            saved.push(path);
        }

        info!(count = saved.len(), "Saved phrase transcripts");
        Ok(saved)
    }
}

/// Render one phrase as a transcript line.
fn render_phrase(phrase: &Phrase) -> String {
    format!(
        "[{} - {}] {} : {}",
        format_offset(phrase.start),
        format_offset(phrase.finish),
        phrase.speaker,
        phrase.text
    )
}

/// Format an offset as `MM:SS.mmm`, with an hour field once the audio runs
/// that long.
pub fn format_offset(offset: Duration) -> String {
    let total_ms = offset.as_millis();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
    } else {
        format!("{:02}:{:02}.{:03}", minutes, secs, ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::{
        SpeechRecognitionAlternative, SpeechRecognitionResult, WordInfo,
    };

    fn word(token: &str, start: &str, end: &str, tag: Option<i32>) -> WordInfo {
        WordInfo {
            word: token.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            speaker_tag: tag,
        }
    }

    fn tagged_result(words: Vec<WordInfo>) -> SpeechRecognitionResult {
        let transcript = words
            .iter()
            .map(|w| w.word.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        SpeechRecognitionResult {
            alternatives: vec![SpeechRecognitionAlternative {
                transcript,
                confidence: Some(0.9),
                words,
            }],
        }
    }

    fn sample_response() -> LongRunningRecognizeResponse {
        LongRunningRecognizeResponse {
            results: vec![
                // Untagged interim result, skipped by the writer.
                tagged_result(vec![word("hi", "0s", "0.500s", None)]),
                tagged_result(vec![
                    word("hi", "0s", "0.500s", Some(1)),
                    word("there", "0.500s", "0.800s", Some(1)),
                    word("yo", "0.800s", "1s", Some(2)),
                ]),
            ],
        }
    }

    fn test_writer() -> (tempfile::TempDir, TranscriptWriter) {
        let root = tempfile::tempdir().unwrap();
        let audio: GcsUri = "gs://bucket/team call.mp3".parse().unwrap();
        let writer = TranscriptWriter::create(root.path(), &audio).unwrap();
        (root, writer)
    }

    #[test]
    fn test_directory_name_encodes_file_name() {
        let (_root, writer) = test_writer();
        let dir_name = writer.dir().file_name().unwrap().to_str().unwrap();
        assert!(dir_name.starts_with("gs-team+call.mp3-"));
    }

    #[test]
    fn test_save_response_round_trips() {
        let (_root, writer) = test_writer();
        let path = writer.save_response(&sample_response()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let parsed: LongRunningRecognizeResponse = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.results.len(), 2);
    }

    #[test]
    fn test_save_transcripts_skips_untagged_results() {
        let (_root, writer) = test_writer();
        let saved = writer.save_transcripts(&sample_response()).unwrap();

        assert_eq!(saved.len(), 1);
        assert!(saved[0].ends_with("transcript.0.txt"));
    }

    #[test]
    fn test_transcript_line_format() {
        let (_root, writer) = test_writer();
        let saved = writer.save_transcripts(&sample_response()).unwrap();

        let content = fs::read_to_string(&saved[0]).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[00:00.000 - 00:00.800] Alligator : hi there",
                "[00:00.800 - 00:01.000] Anteater : yo",
            ]
        );
    }

    #[test]
    fn test_empty_response_writes_nothing() {
        let (_root, writer) = test_writer();
        let saved = writer
            .save_transcripts(&LongRunningRecognizeResponse::default())
            .unwrap();
        assert!(saved.is_empty());
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(Duration::ZERO), "00:00.000");
        assert_eq!(format_offset(Duration::from_millis(1_300)), "00:01.300");
        assert_eq!(format_offset(Duration::from_secs(65)), "01:05.000");
        assert_eq!(
            format_offset(Duration::from_millis(3_661_042)),
            "01:01:01.042"
        );
    }
}
