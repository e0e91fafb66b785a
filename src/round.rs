use crate::word_bank::{Difficulty, WordRecord};
use itertools::Itertools;
use std::collections::BTreeSet;

pub const MAX_ATTEMPTS: u32 = 6;
pub const ATTEMPT_BONUS: u32 = 5;

/// What a single accepted guess did to the round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LetterOutcome {
    /// Letter is in the word but the word is not yet complete.
    Hit,
    /// Letter completed the word; no attempt is charged.
    Won,
    /// Letter is not in the word; one attempt consumed.
    Miss,
    /// Letter was guessed before, in either set. No state change.
    Repeat,
}

/// Normalizes raw guess input: trimmed, single ASCII letter, uppercased.
/// Anything else is rejected before it reaches the round state.
pub fn parse_guess(raw: &str) -> Option<char> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// represents one guessing round over a single hidden word
#[derive(Debug, Clone)]
pub struct Round {
    record: WordRecord,
    target: String,
    pub correct_letters: BTreeSet<char>,
    pub wrong_letters: BTreeSet<char>,
    pub attempts_remaining: u32,
}

/// Plain-data result of a finished round, handed to the session and the
/// presentation layer.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub success: bool,
    pub points_earned: u32,
    pub word: WordRecord,
    pub correct_letters: BTreeSet<char>,
    pub wrong_letters: BTreeSet<char>,
    pub attempts_remaining: u32,
}

impl Round {
    pub fn new(record: WordRecord, max_attempts: u32) -> Self {
        let target = record.word.to_ascii_uppercase();
        Self {
            record,
            target,
            correct_letters: BTreeSet::new(),
            wrong_letters: BTreeSet::new(),
            attempts_remaining: max_attempts,
        }
    }

    pub fn word_len(&self) -> usize {
        self.target.chars().count()
    }

    /// Applies an already-validated uppercase letter to the round.
    pub fn guess(&mut self, letter: char) -> LetterOutcome {
        if self.correct_letters.contains(&letter) || self.wrong_letters.contains(&letter) {
            return LetterOutcome::Repeat;
        }

        if self.target.contains(letter) {
            self.correct_letters.insert(letter);
            if self.is_won() {
                LetterOutcome::Won
            } else {
                LetterOutcome::Hit
            }
        } else {
            self.wrong_letters.insert(letter);
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            LetterOutcome::Miss
        }
    }

    pub fn is_won(&self) -> bool {
        self.target.chars().all(|c| self.correct_letters.contains(&c))
    }

    pub fn is_lost(&self) -> bool {
        self.attempts_remaining == 0 && !self.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.attempts_remaining == 0
    }

    /// The word with unrevealed letters blanked out, e.g. "C _ T".
    /// Plain text; coloring is the presentation layer's business.
    pub fn masked_word(&self) -> String {
        self.target
            .chars()
            .map(|c| {
                if self.correct_letters.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .join(" ")
    }

    /// Points for the round as it stands: base tier points plus a bonus for
    /// every attempt still unspent, zero unless the word was completed.
    pub fn points(&self, difficulty: Difficulty) -> u32 {
        if self.is_won() {
            difficulty.base_points() + self.attempts_remaining * ATTEMPT_BONUS
        } else {
            0
        }
    }

    pub fn into_outcome(self, difficulty: Difficulty) -> RoundOutcome {
        let success = self.is_won();
        let points_earned = self.points(difficulty);
        RoundOutcome {
            success,
            points_earned,
            word: self.record,
            correct_letters: self.correct_letters,
            wrong_letters: self.wrong_letters,
            attempts_remaining: self.attempts_remaining,
        }
    }
}
