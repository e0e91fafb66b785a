use crate::ledger::ScoreEntry;
use crate::round::{Round, RoundOutcome};
use crate::session::SessionStats;
use crate::word_bank::WordRecord;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{style, Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use itertools::Itertools;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Renders core data structures to the terminal. Everything it consumes is
/// plain data; no game logic lives here. In plain mode (piped output, dumb
/// terminals, tests) colors, clearing and the countdown are suppressed.
#[derive(Debug, Clone, Copy)]
pub struct Screen {
    plain: bool,
}

impl Screen {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    fn tint(&self, text: &str, color: Color) -> String {
        if self.plain {
            text.to_string()
        } else {
            style(text).with(color).to_string()
        }
    }

    fn headline(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            style(text).with(Color::Cyan).bold().to_string()
        }
    }

    pub fn clear(&self) {
        if self.plain {
            return;
        }
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }

    pub fn countdown(&self) {
        if self.plain {
            return;
        }
        for i in (1..=3u8).rev() {
            print!("{} ", self.tint(&i.to_string(), Color::Yellow));
            let _ = io::stdout().flush();
            thread::sleep(Duration::from_secs(1));
        }
        println!("{}", self.tint("GO!", Color::Green));
    }

    pub fn main_menu(&self) {
        println!();
        println!("{}", self.headline("========== LETTERWISE =========="));
        println!("{}", self.headline("  vocabulary letter guessing"));
        println!();
        println!("{}", self.tint("1. Start New Game", Color::Green));
        println!("{}", self.tint("2. View High Scores", Color::Yellow));
        println!("{}", self.tint("3. Instructions", Color::Blue));
        println!("{}", self.tint("4. Exit", Color::Red));
        println!();
        self.prompt("Choose an option (1-4): ");
    }

    pub fn instructions(&self) {
        println!();
        println!("{}", self.headline("===== HOW TO PLAY ====="));
        println!();
        println!("Guess the hidden English word one letter at a time.");
        println!();
        println!("- 10 rounds per game, 3 difficulty tiers");
        println!("- each word comes with its meaning, IPA guide and an example sentence");
        println!("- a wrong letter costs one of your 6 attempts");
        println!("- completing a word scores tier points (10/20/30)");
        println!("  plus 5 bonus points per attempt you still had left");
        println!();
        println!("Scores from your best games land on a persistent top-10 board.");
    }

    pub fn high_scores(&self, entries: &[ScoreEntry]) {
        println!();
        println!("{}", self.headline("===== HIGH SCORES ====="));
        println!();
        if entries.is_empty() {
            println!(
                "{}",
                self.tint("No high scores yet. Be the first!", Color::Yellow)
            );
            return;
        }
        println!(
            "{:<6} {:<15} {:<8} {:<12} {:<16}",
            "Rank", "Name", "Score", "Difficulty", "Date"
        );
        println!("{}", "-".repeat(60));
        for (i, entry) in entries.iter().enumerate() {
            println!(
                "{:<6} {:<15} {:<8} {:<12} {:<16}",
                i + 1,
                entry.name,
                entry.score,
                entry.difficulty.to_string(),
                entry.date
            );
        }
    }

    pub fn difficulty_menu(&self) {
        println!();
        println!("{}", self.headline("===== SELECT DIFFICULTY ====="));
        println!();
        println!(
            "{}   (simple words, 10 points each)",
            self.tint("1. Easy", Color::Green)
        );
        println!(
            "{} (intermediate words, 20 points each)",
            self.tint("2. Medium", Color::Yellow)
        );
        println!(
            "{}   (advanced words, 30 points each)",
            self.tint("3. Hard", Color::Red)
        );
        println!();
        self.prompt("Choose difficulty (1-3): ");
    }

    pub fn name_prompt(&self) {
        self.prompt("Enter your name: ");
    }

    pub fn guess_prompt(&self) {
        let text = self.tint("Enter a letter: ", Color::Green);
        self.prompt(&text);
    }

    pub fn continue_prompt(&self, text: &str) {
        println!();
        let text = self.tint(text, Color::Cyan);
        self.prompt(&text);
    }

    pub fn invalid_choice(&self) {
        println!("{}", self.tint("Invalid choice. Please try again.", Color::Red));
    }

    pub fn invalid_guess(&self) {
        println!(
            "{}",
            self.tint("Please enter a single alphabet letter!", Color::Red)
        );
    }

    pub fn already_guessed(&self, letter: char) {
        println!(
            "{}",
            self.tint(&format!("You already guessed '{letter}'!"), Color::Yellow)
        );
    }

    pub fn hit(&self, letter: char) {
        println!(
            "{}",
            self.tint(&format!("CORRECT! '{letter}' is in the word."), Color::Green)
        );
    }

    pub fn miss(&self, letter: char) {
        println!(
            "{}",
            self.tint(&format!("WRONG! '{letter}' is not in the word."), Color::Red)
        );
    }

    pub fn round_header(&self, round_no: usize, total_rounds: usize, word_len: usize) {
        println!();
        println!(
            "{}",
            self.headline(&format!("Round {round_no} of {total_rounds}"))
        );
        println!(
            "{}",
            self.tint(&format!("Word has {word_len} letters"), Color::Yellow)
        );
    }

    pub fn round_state(&self, round: &Round) {
        println!();
        println!(
            "{}",
            self.tint(
                &format!("Attempts left: {}", round.attempts_remaining),
                Color::Cyan
            )
        );
        println!("Word: {}", round.masked_word());
        if !round.correct_letters.is_empty() {
            let letters = round.correct_letters.iter().join(" ");
            println!("Correct: {}", self.tint(&letters, Color::Green));
        }
        if !round.wrong_letters.is_empty() {
            let letters = round.wrong_letters.iter().join(" ");
            println!("Wrong: {}", self.tint(&letters, Color::Red));
        }
    }

    pub fn round_won(&self, outcome: &RoundOutcome) {
        println!();
        println!("{}", self.tint("WORD COMPLETED!", Color::Green));
        let bonus = outcome.attempts_remaining * crate::round::ATTEMPT_BONUS;
        let base = outcome.points_earned - bonus;
        println!(
            "{}",
            self.tint(
                &format!(
                    "You earned {} points! ({base} + {bonus} bonus)",
                    outcome.points_earned
                ),
                Color::Green
            )
        );
    }

    pub fn round_lost(&self, outcome: &RoundOutcome) {
        println!();
        println!("{}", self.tint("OUT OF ATTEMPTS", Color::Red));
        println!(
            "{}",
            self.tint(
                &format!("The word was: {}", outcome.word.word.to_ascii_uppercase()),
                Color::Red
            )
        );
    }

    pub fn word_info(&self, record: &WordRecord) {
        println!();
        println!("{}", self.headline("=== WORD INFORMATION ==="));
        println!("{} {}", self.tint("Word:", Color::Green), record.word);
        println!("{} {}", self.tint("Meaning:", Color::Yellow), record.meaning);
        println!("{} {}", self.tint("Pronunciation:", Color::Blue), record.ipa);
        println!("{} {}", self.tint("Example:", Color::Magenta), record.sentence);
    }

    pub fn final_stats(&self, stats: &SessionStats) {
        println!();
        println!("{}", self.headline("===== FINAL STATS ====="));
        println!();
        println!("{} {}", self.tint("Final Score:", Color::Green), stats.total_score);
        println!(
            "{} {}",
            self.tint("Words Learned:", Color::Yellow),
            stats.words_learned.len()
        );
        println!(
            "{} {}",
            self.tint("Time Played:", Color::Blue),
            format_elapsed(stats.elapsed())
        );
        println!(
            "{} {:.1}%",
            self.tint("Accuracy:", Color::Magenta),
            stats.accuracy()
        );
        println!(
            "{} {}/{}",
            self.tint("Correct Guesses:", Color::Cyan),
            stats.correct_guesses,
            stats.total_attempts
        );
        println!();
        if stats.words_learned.is_empty() {
            println!("Words you learned: none");
        } else {
            println!(
                "Words you learned: {}",
                stats.words_learned.iter().join(", ")
            );
        }
    }

    pub fn new_high_score(&self) {
        println!();
        println!("{}", self.tint("*** NEW HIGH SCORE! ***", Color::Green));
    }

    pub fn farewell(&self) {
        println!();
        println!("{}", self.tint("Thanks for playing letterwise!", Color::Green));
        println!("{}", self.tint("Keep learning!", Color::Cyan));
    }

    fn prompt(&self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }
}

pub fn format_elapsed(elapsed: chrono::Duration) -> String {
    let total_secs = elapsed.num_seconds().max(0);
    format!("{}m {}s", total_secs / 60, total_secs % 60)
}
