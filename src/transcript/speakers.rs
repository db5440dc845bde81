//! Speaker display names.
//!
//! The recognition service labels speakers with opaque integer tags, stable
//! within one response but meaningless across jobs. Each tag is bound to a
//! display name from a fixed pool on first encounter and memoized for the
//! rest of the job. Once the pool is exhausted the names repeat with a
//! numeric suffix rather than colliding silently.

use std::collections::HashMap;

/// Candidate display names assigned to speaker tags.
const NAME_POOL: &[&str] = &[
    "alligator",
    "anteater",
    "armadillo",
    "auroch",
    "axolotl",
    "badger",
    "bat",
    "bear",
    "beaver",
    "blobfish",
    "buffalo",
    "camel",
    "chameleon",
    "cheetah",
    "chipmunk",
    "chinchilla",
    "chupacabra",
    "cormorant",
    "coyote",
    "crow",
    "dingo",
    "dinosaur",
    "dog",
    "dolphin",
    "dragon",
    "duck",
    "dumbo octopus",
    "elephant",
    "ferret",
    "fox",
    "frog",
    "giraffe",
    "goose",
    "gopher",
    "grizzly",
    "hamster",
    "hedgehog",
    "hippo",
    "hyena",
    "jackal",
    "jackalope",
    "ibex",
    "ifrit",
    "iguana",
    "kangaroo",
    "kiwi",
    "koala",
    "kraken",
    "lemur",
    "leopard",
    "liger",
    "lion",
    "llama",
    "manatee",
    "mink",
    "monkey",
    "moose",
    "narwhal",
    "nyan cat",
    "orangutan",
    "otter",
    "panda",
    "penguin",
    "platypus",
    "python",
    "pumpkin",
    "quagga",
    "quokka",
    "rabbit",
    "raccoon",
    "rhino",
    "sheep",
    "shrew",
    "skunk",
    "slow loris",
    "squirrel",
    "tiger",
    "turtle",
    "unicorn",
    "walrus",
    "wolf",
    "wolverine",
    "wombat",
];

/// Per-job mapping of diarization speaker tags to display names.
///
/// Owned by one transcription job and passed explicitly into segmentation;
/// names assigned in one job carry no meaning in another.
#[derive(Debug, Default)]
pub struct SpeakerNames {
    assigned: HashMap<i32, String>,
}

impl SpeakerNames {
    /// Create an empty mapping for a new transcription job.
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for a speaker tag, assigning one on first encounter.
    ///
    /// Names are drawn from the pool in order. After the pool is exhausted it
    /// repeats with a round number appended, so two tags never share a name.
    pub fn name_for(&mut self, tag: i32) -> String {
        if let Some(name) = self.assigned.get(&tag) {
            return name.clone();
        }

        let index = self.assigned.len();
        let base = title_case(NAME_POOL[index % NAME_POOL.len()]);
        let round = index / NAME_POOL.len();
        let name = if round == 0 {
            base
        } else {
            format!("{} {}", base, round + 1)
        };

        self.assigned.insert(tag, name.clone());
        name
    }

    /// Number of distinct speakers seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// True when no speaker has been named yet.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Title-case each word of a pool name ("dumbo octopus" -> "Dumbo Octopus").
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_tag_same_name() {
        let mut speakers = SpeakerNames::new();
        let first = speakers.name_for(7);
        let second = speakers.name_for(7);
        assert_eq!(first, second);
        assert_eq!(speakers.len(), 1);
    }

    #[test]
    fn test_distinct_tags_distinct_names() {
        let mut speakers = SpeakerNames::new();
        let a = speakers.name_for(1);
        let b = speakers.name_for(2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_names_are_title_cased() {
        let mut speakers = SpeakerNames::new();
        assert_eq!(speakers.name_for(1), "Alligator");
    }

    #[test]
    fn test_pool_exhaustion_appends_round_suffix() {
        let mut speakers = SpeakerNames::new();
        let mut seen = std::collections::HashSet::new();

        for tag in 0..(NAME_POOL.len() as i32 + 2) {
            assert!(seen.insert(speakers.name_for(tag)), "name collision");
        }

        // The first post-exhaustion names reuse the pool head with a suffix.
        assert_eq!(speakers.name_for(NAME_POOL.len() as i32), "Alligator 2");
        assert_eq!(speakers.name_for(NAME_POOL.len() as i32 + 1), "Anteater 2");
    }

    #[test]
    fn test_title_case_multi_word() {
        assert_eq!(title_case("dumbo octopus"), "Dumbo Octopus");
        assert_eq!(title_case("slow loris"), "Slow Loris");
    }
}
