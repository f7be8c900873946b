//! Nickle - CLI
//!
//! Daily word game with TUI and CLI modes, plus tools for inspecting the
//! target schedule.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nickle::{
    commands::{DailyGame, build_schedule, check_guess, run_simple},
    config::GameConfig,
    daily::{SelectionMethod, target_word_for_date},
    output::{print_check_result, print_schedule, print_target},
    wordlists::WordLists,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nickle",
    about = "Guess the daily five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Day to play or inspect (YYYY-MM-DD, default: today)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Target selection: legacy (default) or hashed
    #[arg(short, long, global = true, default_value = "legacy")]
    method: SelectionMethod,

    /// Target word list file (default: embedded list)
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// Allowed guess list file (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Saved game file (default: platform data directory)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line)
    Simple,

    /// Print the target word for the day
    Word,

    /// Classify a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Print the share text of today's saved game
    Share,

    /// Compute targets for consecutive days starting at --date
    Schedule {
        /// Number of days
        #[arg(short = 'n', long, default_value = "30")]
        days: u64,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lists = WordLists::from_paths(cli.targets.as_deref(), cli.guesses.as_deref())?;
    let config = GameConfig::new(cli.date, cli.method, cli.state);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&lists, &config),
        Commands::Simple => run_simple_command(&lists, &config),
        Commands::Word => run_word_command(&lists, &config),
        Commands::Check { guess, target } => run_check_command(&guess, &target),
        Commands::Share => run_share_command(&lists, &config),
        Commands::Schedule { days } => run_schedule_command(&lists, &config, days),
    }
}

fn run_play_command(lists: &WordLists, config: &GameConfig) -> Result<()> {
    use nickle::interactive::{App, run_tui};

    let game = DailyGame::open(lists, config)?;
    run_tui(App::new(game))
}

fn run_simple_command(lists: &WordLists, config: &GameConfig) -> Result<()> {
    let mut game = DailyGame::open(lists, config)?;
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_word_command(lists: &WordLists, config: &GameConfig) -> Result<()> {
    let word = target_word_for_date(config.date, lists.targets(), config.method)?;
    print_target(config.date, config.method.name(), word.text());
    Ok(())
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_share_command(lists: &WordLists, config: &GameConfig) -> Result<()> {
    if !config.is_today() {
        bail!("Only today's game can be shared");
    }
    let game = DailyGame::open(lists, config)?;
    if game.session.guess_count() == 0 {
        bail!("No guesses saved for today");
    }
    println!("{}", game.share_text());
    Ok(())
}

fn run_schedule_command(lists: &WordLists, config: &GameConfig, days: u64) -> Result<()> {
    let start: NaiveDate = config.date;
    let schedule = build_schedule(lists.targets(), start, days, config.method, true)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("Failed to build schedule from {start}"))?;
    print_schedule(&schedule);
    Ok(())
}
