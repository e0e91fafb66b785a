pub mod input;
pub mod ledger;
pub mod round;
pub mod session;
pub mod ui;
pub mod word_bank;

use crate::input::{InputError, LineSource, StdinSource};
use crate::ledger::{FileScoreStore, ScoreLedger, ScoreStore};
use crate::round::MAX_ATTEMPTS;
use crate::session::{offer_high_score, GameSession, SessionConfig, ROUNDS_PER_GAME};
use crate::ui::Screen;
use crate::word_bank::{Difficulty, WordBank};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;

/// terminal vocabulary trainer with letter-by-letter word guessing
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess hidden English words one letter at a time across three difficulty tiers. Each word comes with its meaning, IPA pronunciation and an example sentence; top scores persist on a local leaderboard."
)]
pub struct Cli {
    /// difficulty tier (skips the interactive difficulty prompt)
    #[clap(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// player name (skips the name prompt)
    #[clap(short, long)]
    name: Option<String>,

    /// number of rounds per game
    #[clap(short, long, default_value_t = ROUNDS_PER_GAME)]
    rounds: usize,

    /// wrong guesses allowed per word
    #[clap(short = 'a', long, default_value_t = MAX_ATTEMPTS)]
    max_attempts: u32,

    /// alternative high-score file
    #[clap(long)]
    scores_file: Option<PathBuf>,

    /// seed the word picker for a reproducible session
    #[clap(long)]
    seed: Option<u64>,

    /// disable colors, screen clearing and the countdown animation
    #[clap(long)]
    plain: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let screen = Screen::new(cli.plain);

    match run(&cli, screen) {
        Ok(()) => ExitCode::SUCCESS,
        Err(InputError::Closed) => {
            // The player hung up mid-session (ctrl-c / closed stdin).
            // Nothing partial is persisted; exit cleanly.
            println!();
            screen.farewell();
            ExitCode::SUCCESS
        }
        Err(InputError::Io(e)) => {
            eprintln!("letterwise: an unexpected error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, screen: Screen) -> Result<(), InputError> {
    let bank = WordBank::embedded();
    let store = match &cli.scores_file {
        Some(path) => FileScoreStore::with_path(path),
        None => FileScoreStore::new(),
    };
    let mut ledger = ScoreLedger::load(store);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut input = StdinSource::new();

    loop {
        screen.clear();
        screen.main_menu();
        let choice = input.read_line()?;

        match choice.as_str() {
            "1" => {
                play_game(cli, screen, &bank, &mut rng, &mut input, &mut ledger)?;
                wait_for_enter(&mut input, screen)?;
            }
            "2" => {
                screen.clear();
                screen.high_scores(ledger.entries());
                wait_for_enter(&mut input, screen)?;
            }
            "3" => {
                screen.clear();
                screen.instructions();
                wait_for_enter(&mut input, screen)?;
            }
            "4" => {
                screen.farewell();
                return Ok(());
            }
            _ => screen.invalid_choice(),
        }
    }
}

fn play_game<S: ScoreStore>(
    cli: &Cli,
    screen: Screen,
    bank: &WordBank,
    rng: &mut StdRng,
    input: &mut StdinSource,
    ledger: &mut ScoreLedger<S>,
) -> Result<(), InputError> {
    let config = SessionConfig {
        rounds: cli.rounds.max(1),
        max_attempts: cli.max_attempts.max(1),
    };

    let report = GameSession::new(bank, rng, input, screen, config)
        .run(cli.difficulty, cli.name.clone())?;

    if offer_high_score(ledger, &report) {
        screen.new_high_score();
    }
    Ok(())
}

fn wait_for_enter(input: &mut StdinSource, screen: Screen) -> Result<(), InputError> {
    screen.continue_prompt("Press Enter to return to the menu...");
    input.read_line().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["letterwise"]);
        assert_eq!(cli.rounds, ROUNDS_PER_GAME);
        assert_eq!(cli.max_attempts, MAX_ATTEMPTS);
        assert!(cli.difficulty.is_none());
        assert!(!cli.plain);
    }

    #[test]
    fn test_cli_difficulty_flag() {
        let cli = Cli::parse_from(["letterwise", "--difficulty", "hard", "--plain"]);
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert!(cli.plain);
    }
}
