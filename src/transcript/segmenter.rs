//! Word-to-phrase segmentation.
//!
//! The recognition service returns a flat sequence of timestamped words, each
//! attributed to a speaker tag. A phrase is a maximal run of consecutive
//! words from one speaker; a new phrase begins exactly where the tag changes.

use super::SpeakerNames;
use crate::error::{Result, TaleError};
use crate::recognition::WordInfo;
use std::time::Duration;

/// A contiguous run of words attributed to one speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    /// Offset of the first word's start from the beginning of the audio.
    pub start: Duration,
    /// Offset of the last word's end.
    pub finish: Duration,
    /// Display name of the speaker.
    pub speaker: String,
    /// Space-joined word tokens.
    pub text: String,
}

/// Group an ordered, speaker-tagged word sequence into phrases.
///
/// Words must already be sorted by time of occurrence; the service guarantees
/// this and the segmenter does not re-sort. An empty sequence yields no
/// phrases. A word with no speaker tag or an unparseable offset fails the
/// whole call — guessing a default speaker or a zero offset would corrupt
/// the transcript.
pub fn phrases(words: &[WordInfo], speakers: &mut SpeakerNames) -> Result<Vec<Phrase>> {
    let mut out = Vec::new();

    let mut current: Option<String> = None;
    let mut start = Duration::ZERO;
    let mut finish = Duration::ZERO;
    let mut tokens: Vec<&str> = Vec::new();

    for word in words {
        let tag = word
            .speaker_tag
            .ok_or_else(|| TaleError::MissingSpeakerTag(word.word.clone()))?;
        let speaker = speakers.name_for(tag);

        match &current {
            None => {
                start = parse_offset(&word.start_time)?;
                current = Some(speaker);
            }
            Some(active) if *active != speaker => {
                out.push(Phrase {
                    start,
                    finish,
                    speaker: active.clone(),
                    text: tokens.join(" "),
                });

                start = parse_offset(&word.start_time)?;
                current = Some(speaker);
                tokens.clear();
            }
            Some(_) => {}
        }

        finish = parse_offset(&word.end_time)?;
        tokens.push(&word.word);
    }

    if let Some(speaker) = current {
        out.push(Phrase {
            start,
            finish,
            speaker,
            text: tokens.join(" "),
        });
    }

    Ok(out)
}

/// Parse a `"1.300s"`-style offset into a duration with millisecond precision.
///
/// The numeric portion is parsed as decimal seconds and rounded to the
/// nearest millisecond. Anything that does not parse as a non-negative
/// finite value is rejected rather than defaulted to zero.
pub fn parse_offset(value: &str) -> Result<Duration> {
    let numeric = value.strip_suffix('s').unwrap_or(value).trim();
    let seconds: f64 = numeric
        .parse()
        .map_err(|_| TaleError::MalformedTimestamp(value.to_string()))?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(TaleError::MalformedTimestamp(value.to_string()));
    }

    Ok(Duration::from_millis((seconds * 1000.0).round() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(token: &str, start: &str, end: &str, tag: i32) -> WordInfo {
        WordInfo {
            word: token.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            speaker_tag: Some(tag),
        }
    }

    #[test]
    fn test_two_speakers_split_at_tag_change() {
        let words = vec![
            word("hi", "0s", "0.500s", 1),
            word("there", "0.500s", "0.800s", 1),
            word("yo", "0.800s", "1s", 2),
        ];
        let mut speakers = SpeakerNames::new();

        let result = phrases(&words, &mut speakers).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].start, Duration::ZERO);
        assert_eq!(result[0].finish, Duration::from_millis(800));
        assert_eq!(result[0].text, "hi there");
        assert_eq!(result[1].start, Duration::from_millis(800));
        assert_eq!(result[1].finish, Duration::from_secs(1));
        assert_eq!(result[1].text, "yo");
        assert_ne!(result[0].speaker, result[1].speaker);
    }

    #[test]
    fn test_single_word_starts_at_word_start() {
        let words = vec![word("ok", "0.100s", "0.300s", 5)];
        let mut speakers = SpeakerNames::new();

        let result = phrases(&words, &mut speakers).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].start, Duration::from_millis(100));
        assert_eq!(result[0].finish, Duration::from_millis(300));
        assert_eq!(result[0].text, "ok");
    }

    #[test]
    fn test_single_speaker_single_phrase() {
        let words: Vec<WordInfo> = (0..10)
            .map(|i| {
                word(
                    "word",
                    &format!("{}.000s", i),
                    &format!("{}.900s", i),
                    3,
                )
            })
            .collect();
        let mut speakers = SpeakerNames::new();

        let result = phrases(&words, &mut speakers).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].start, Duration::ZERO);
        assert_eq!(result[0].finish, Duration::from_millis(9_900));
    }

    #[test]
    fn test_empty_input_yields_no_phrases() {
        let mut speakers = SpeakerNames::new();
        let result = phrases(&[], &mut speakers).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_phrase_count_matches_speaker_runs() {
        let words = vec![
            word("a", "0s", "1s", 1),
            word("b", "1s", "2s", 2),
            word("c", "2s", "3s", 2),
            word("d", "3s", "4s", 1),
            word("e", "4s", "5s", 3),
        ];
        let mut speakers = SpeakerNames::new();

        let result = phrases(&words, &mut speakers).unwrap();

        // Runs: [a], [b c], [d], [e]
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_tokens_preserved_in_order() {
        let words = vec![
            word("one", "0s", "1s", 1),
            word("two", "1s", "2s", 1),
            word("three", "2s", "3s", 2),
            word("four", "3s", "4s", 1),
        ];
        let mut speakers = SpeakerNames::new();

        let result = phrases(&words, &mut speakers).unwrap();

        let joined: Vec<&str> = result
            .iter()
            .flat_map(|p| p.text.split(' '))
            .collect();
        assert_eq!(joined, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_phrases_ordered_and_well_formed() {
        let words = vec![
            word("a", "0.250s", "1s", 1),
            word("b", "1s", "2.500s", 2),
            word("c", "2.500s", "3s", 1),
        ];
        let mut speakers = SpeakerNames::new();

        let result = phrases(&words, &mut speakers).unwrap();

        for phrase in &result {
            assert!(phrase.start <= phrase.finish);
        }
        for pair in result.windows(2) {
            assert!(pair[0].finish <= pair[1].start);
        }
    }

    #[test]
    fn test_reused_speaker_keeps_name() {
        let words = vec![
            word("a", "0s", "1s", 1),
            word("b", "1s", "2s", 2),
            word("c", "2s", "3s", 1),
        ];
        let mut speakers = SpeakerNames::new();

        let result = phrases(&words, &mut speakers).unwrap();

        assert_eq!(result[0].speaker, result[2].speaker);
    }

    #[test]
    fn test_missing_speaker_tag_fails() {
        let words = vec![WordInfo {
            word: "oops".to_string(),
            start_time: "0s".to_string(),
            end_time: "1s".to_string(),
            speaker_tag: None,
        }];
        let mut speakers = SpeakerNames::new();

        let err = phrases(&words, &mut speakers).unwrap_err();
        assert!(matches!(err, TaleError::MissingSpeakerTag(_)));
    }

    #[test]
    fn test_malformed_timestamp_fails() {
        let words = vec![word("bad", "not-a-number", "1s", 1)];
        let mut speakers = SpeakerNames::new();

        let err = phrases(&words, &mut speakers).unwrap_err();
        assert!(matches!(err, TaleError::MalformedTimestamp(_)));
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("1.300s").unwrap(), Duration::from_millis(1_300));
        assert_eq!(parse_offset("0s").unwrap(), Duration::ZERO);
        assert_eq!(parse_offset("90s").unwrap(), Duration::from_secs(90));
        // Tolerates a missing unit suffix, as the original reader did.
        assert_eq!(parse_offset("2.5").unwrap(), Duration::from_millis(2_500));
    }

    #[test]
    fn test_parse_offset_rounds_to_millisecond() {
        assert_eq!(parse_offset("0.0004s").unwrap(), Duration::ZERO);
        assert_eq!(parse_offset("0.0006s").unwrap(), Duration::from_millis(1));
    }

    #[test]
    fn test_parse_offset_rejects_garbage() {
        assert!(parse_offset("").is_err());
        assert!(parse_offset("abc").is_err());
        assert!(parse_offset("-1.5s").is_err());
        assert!(parse_offset("NaN").is_err());
        assert!(parse_offset("inf").is_err());
    }
}
