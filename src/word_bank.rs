use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::from_str;

static WORD_DIR: Dir = include_dir!("src/words");

/// One entry in the curated vocabulary dataset: the hidden word plus the
/// learning material shown once the round ends.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WordRecord {
    pub word: String,
    pub meaning: String,
    pub ipa: String,
    pub sentence: String,
}

#[allow(dead_code)]
#[derive(Deserialize, Debug)]
struct TierFile {
    name: String,
    size: u32,
    words: Vec<WordRecord>,
}

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Points awarded for completing a word of this tier, before the
    /// remaining-attempts bonus.
    pub fn base_points(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    /// Maps the "1"-"3" difficulty menu input to a tier.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Difficulty::Easy),
            "2" => Some(Difficulty::Medium),
            "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// The static word dataset, one pool per difficulty tier.
#[derive(Debug, Clone)]
pub struct WordBank {
    easy: Vec<WordRecord>,
    medium: Vec<WordRecord>,
    hard: Vec<WordRecord>,
}

impl WordBank {
    /// Loads the dataset embedded in the binary. A malformed tier file is a
    /// broken build, not a runtime condition.
    pub fn embedded() -> Self {
        Self {
            easy: load_tier("easy.json"),
            medium: load_tier("medium.json"),
            hard: load_tier("hard.json"),
        }
    }

    /// Builds a bank from arbitrary records; used by tests that need a
    /// predictable word pool.
    pub fn from_records(
        easy: Vec<WordRecord>,
        medium: Vec<WordRecord>,
        hard: Vec<WordRecord>,
    ) -> Self {
        Self { easy, medium, hard }
    }

    pub fn words_for(&self, difficulty: Difficulty) -> &[WordRecord] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Draws a word uniformly at random, with replacement across rounds.
    pub fn draw<R: Rng>(&self, rng: &mut R, difficulty: Difficulty) -> &WordRecord {
        self.words_for(difficulty)
            .choose(rng)
            .expect("word tier must not be empty")
    }
}

fn load_tier(file_name: &str) -> Vec<WordRecord> {
    let file = WORD_DIR.get_file(file_name).expect("word file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let tier: TierFile = from_str(file_as_str).expect("Unable to deserialize word json");

    tier.words
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_embedded_tiers_populated() {
        let bank = WordBank::embedded();

        for difficulty in Difficulty::ALL {
            let words = bank.words_for(difficulty);
            assert_eq!(words.len(), 10, "{difficulty} tier should have 10 words");
        }
    }

    #[test]
    fn test_embedded_words_are_alphabetic() {
        let bank = WordBank::embedded();

        for difficulty in Difficulty::ALL {
            for record in bank.words_for(difficulty) {
                assert!(!record.word.is_empty());
                assert!(
                    record.word.chars().all(|c| c.is_ascii_alphabetic()),
                    "{} contains a non-letter",
                    record.word
                );
                assert!(!record.meaning.is_empty());
                assert!(!record.ipa.is_empty());
                assert!(!record.sentence.is_empty());
            }
        }
    }

    #[test]
    fn test_base_points() {
        assert_eq!(Difficulty::Easy.base_points(), 10);
        assert_eq!(Difficulty::Medium.base_points(), 20);
        assert_eq!(Difficulty::Hard.base_points(), 30);
    }

    #[test]
    fn test_difficulty_display_lowercase() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn test_from_menu_choice() {
        assert_eq!(Difficulty::from_menu_choice("1"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_menu_choice("2"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_menu_choice("3"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_menu_choice("4"), None);
        assert_eq!(Difficulty::from_menu_choice(""), None);
        assert_eq!(Difficulty::from_menu_choice("easy"), None);
    }

    #[test]
    fn test_draw_is_deterministic_with_seed() {
        let bank = WordBank::embedded();

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let a = bank.draw(&mut rng_a, Difficulty::Medium);
            let b = bank.draw(&mut rng_b, Difficulty::Medium);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_draw_stays_in_tier() {
        let bank = WordBank::embedded();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let record = bank.draw(&mut rng, Difficulty::Hard);
            assert!(bank.words_for(Difficulty::Hard).contains(record));
        }
    }

    #[test]
    fn test_difficulty_serde_tag() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");

        let back: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(back, Difficulty::Hard);
    }
}
