use crate::input::{InputError, LineSource};
use crate::ledger::{ScoreEntry, ScoreLedger, ScoreStore};
use crate::round::{parse_guess, LetterOutcome, Round, RoundOutcome, MAX_ATTEMPTS};
use crate::ui::Screen;
use crate::word_bank::{Difficulty, WordBank};
use chrono::{DateTime, Local};
use rand::Rng;

pub const ROUNDS_PER_GAME: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    AwaitingDifficulty,
    Playing,
    Summarizing,
    Done,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub rounds: usize,
    pub max_attempts: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounds: ROUNDS_PER_GAME,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Aggregate statistics for one game, accumulated across rounds win or lose.
#[derive(Debug, Clone)]
pub struct SessionStats {
    pub total_score: u32,
    pub rounds_played: u32,
    pub words_learned: Vec<String>,
    pub total_attempts: u32,
    pub correct_guesses: u32,
    pub started_at: DateTime<Local>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            total_score: 0,
            rounds_played: 0,
            words_learned: Vec::new(),
            total_attempts: 0,
            correct_guesses: 0,
            started_at: Local::now(),
        }
    }

    /// Guess accuracy as a percentage; 0.0 before any guess has been made.
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            0.0
        } else {
            self.correct_guesses as f64 / self.total_attempts as f64 * 100.0
        }
    }

    pub fn elapsed(&self) -> chrono::Duration {
        Local::now() - self.started_at
    }

    /// One increment per accepted guess, right or wrong. Rejected and
    /// repeated input never reaches this.
    fn record_guess(&mut self, hit: bool) {
        self.total_attempts += 1;
        if hit {
            self.correct_guesses += 1;
        }
    }

    fn absorb(&mut self, outcome: &RoundOutcome) {
        self.rounds_played += 1;
        self.total_score += outcome.points_earned;
        if outcome.success {
            self.words_learned.push(outcome.word.word.clone());
        }
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the menu layer needs after a finished game.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub name: String,
    pub difficulty: Difficulty,
    pub stats: SessionStats,
}

/// Runs one full game: difficulty and name capture, a fixed number of
/// rounds, then the summary. Input comes through the injected `LineSource`
/// and words through the injected rng, so the whole flow runs headless in
/// tests.
pub struct GameSession<'a, R: Rng, L: LineSource> {
    bank: &'a WordBank,
    rng: &'a mut R,
    input: &'a mut L,
    screen: Screen,
    config: SessionConfig,
    phase: SessionPhase,
}

impl<'a, R: Rng, L: LineSource> GameSession<'a, R, L> {
    pub fn new(
        bank: &'a WordBank,
        rng: &'a mut R,
        input: &'a mut L,
        screen: Screen,
        config: SessionConfig,
    ) -> Self {
        Self {
            bank,
            rng,
            input,
            screen,
            config,
            phase: SessionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Plays a complete game. `preset_difficulty` / `preset_name` skip the
    /// corresponding prompts (set from CLI flags). Failed rounds still
    /// consume a round slot; the loop never ends early.
    pub fn run(
        &mut self,
        preset_difficulty: Option<Difficulty>,
        preset_name: Option<String>,
    ) -> Result<SessionReport, InputError> {
        self.phase = SessionPhase::AwaitingDifficulty;
        let difficulty = match preset_difficulty {
            Some(d) => d,
            None => self.prompt_difficulty()?,
        };
        let name = match preset_name {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => self.prompt_name()?,
        };

        self.screen.clear();
        self.screen.countdown();

        self.phase = SessionPhase::Playing;
        let mut stats = SessionStats::new();

        for round_no in 1..=self.config.rounds {
            let record = self.bank.draw(self.rng, difficulty).clone();
            let mut round = Round::new(record, self.config.max_attempts);
            self.screen
                .round_header(round_no, self.config.rounds, round.word_len());

            self.play_round(&mut round, &mut stats)?;

            let outcome = round.into_outcome(difficulty);
            if outcome.success {
                self.screen.round_won(&outcome);
            } else {
                self.screen.round_lost(&outcome);
            }
            self.screen.word_info(&outcome.word);
            stats.absorb(&outcome);

            if round_no < self.config.rounds {
                self.screen
                    .continue_prompt("Press Enter to continue to the next round...");
                self.input.read_line()?;
                self.screen.clear();
            }
        }

        self.phase = SessionPhase::Summarizing;
        self.screen.final_stats(&stats);
        self.phase = SessionPhase::Done;

        Ok(SessionReport {
            name,
            difficulty,
            stats,
        })
    }

    fn play_round(&mut self, round: &mut Round, stats: &mut SessionStats) -> Result<(), InputError> {
        while !round.is_over() {
            self.screen.round_state(round);
            let letter = self.prompt_guess()?;

            match round.guess(letter) {
                LetterOutcome::Repeat => self.screen.already_guessed(letter),
                LetterOutcome::Hit | LetterOutcome::Won => {
                    stats.record_guess(true);
                    self.screen.hit(letter);
                }
                LetterOutcome::Miss => {
                    stats.record_guess(false);
                    self.screen.miss(letter);
                }
            }
        }
        Ok(())
    }

    fn prompt_difficulty(&mut self) -> Result<Difficulty, InputError> {
        loop {
            self.screen.difficulty_menu();
            let line = self.input.read_line()?;
            match Difficulty::from_menu_choice(&line) {
                Some(d) => return Ok(d),
                None => self.screen.invalid_choice(),
            }
        }
    }

    fn prompt_name(&mut self) -> Result<String, InputError> {
        loop {
            self.screen.name_prompt();
            let name = self.input.read_line()?;
            if !name.is_empty() {
                return Ok(name);
            }
        }
    }

    fn prompt_guess(&mut self) -> Result<char, InputError> {
        loop {
            self.screen.guess_prompt();
            let line = self.input.read_line()?;
            match parse_guess(&line) {
                Some(c) => return Ok(c),
                None => self.screen.invalid_guess(),
            }
        }
    }
}

/// Offers a finished game to the ledger. Returns true when the score made
/// the board (board has room, or the score strictly beats the lowest entry).
pub fn offer_high_score<S: ScoreStore>(
    ledger: &mut ScoreLedger<S>,
    report: &SessionReport,
) -> bool {
    if ledger.qualifies(report.stats.total_score) {
        ledger.insert(ScoreEntry::new(
            report.name.clone(),
            report.stats.total_score,
            report.difficulty,
        ));
        true
    } else {
        false
    }
}
