//! Hangman - CLI
//!
//! Console and TUI hangman, plus automated players for solving and benchmarking.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hangman::{
    commands::{SolveConfig, run_benchmark, run_simple, solve_word},
    core::DEFAULT_MAX_ATTEMPTS,
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyType},
    wordlists::{WordSource, loader::load_from_file},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{Level, info};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy for automated players: frequency (default), alphabetical, random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Wrong guesses allowed per game (1-26)
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = parse_attempts)]
    attempts: usize,

    /// Seed for word selection and the random strategy (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Console mode (default - one guess per line)
    Simple,

    /// Interactive TUI mode
    Play,

    /// Let an automated player solve a specific word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts for each turn
        #[arg(short, long)]
        candidates: bool,
    },

    /// Play every word in the list with an automated player
    Benchmark {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn parse_attempts(value: &str) -> Result<usize, String> {
    let attempts: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (1..=26).contains(&attempts) {
        Ok(attempts)
    } else {
        Err("attempts must be between 1 and 26".to_string())
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the word source based on the -w flag
///
/// - "builtin": the embedded list
/// - "<path>": one word per line, invalid lines skipped
fn load_word_source(wordlist: &str) -> Result<WordSource> {
    match wordlist {
        "builtin" => WordSource::builtin().context("built-in word list is unusable"),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            WordSource::new(words).with_context(|| format!("word list '{path}' is unusable"))
        }
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = load_word_source(&cli.wordlist)?;
    let seed = resolve_seed(cli.seed);
    info!(words = source.len(), attempts = cli.attempts, seed, "word source ready");

    let rng = StdRng::seed_from_u64(seed);

    // Default to console mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple_command(&source, rng, cli.attempts),
        Commands::Play => run_play_command(&source, rng, cli.attempts),
        Commands::Solve { word, candidates } => {
            let strategy = StrategyType::from_name(&cli.strategy, seed);
            run_solve_command(strategy, &word, candidates, &source, cli.attempts)
        }
        Commands::Benchmark { limit } => {
            let strategy = StrategyType::from_name(&cli.strategy, seed);
            run_benchmark_command(strategy, limit, &source, cli.attempts);
            Ok(())
        }
    }
}

fn run_simple_command(source: &WordSource, mut rng: StdRng, attempts: usize) -> Result<()> {
    let tally = run_simple(source, &mut rng, attempts).context("console game failed")?;
    info!(played = tally.games_played, won = tally.games_won, "console game ended");
    Ok(())
}

fn run_play_command(source: &WordSource, rng: StdRng, attempts: usize) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(source, rng, attempts);
    let tally = run_tui(app)?;
    println!(
        "Games played: {} | Won: {} | Lost: {}",
        tally.games_played,
        tally.games_won,
        tally.games_lost()
    );
    Ok(())
}

fn run_solve_command(
    strategy: StrategyType,
    word: &str,
    candidates: bool,
    source: &WordSource,
    attempts: usize,
) -> Result<()> {
    let solver = Solver::new(strategy, source.words());

    let config = SolveConfig::new(word.to_string(), attempts);
    let result = solve_word(&config, &solver).with_context(|| format!("cannot solve '{word}'"))?;

    print_solve_result(&result, candidates);
    Ok(())
}

fn run_benchmark_command(
    strategy: StrategyType,
    limit: Option<usize>,
    source: &WordSource,
    attempts: usize,
) {
    let name = strategy.name();
    let solver = Solver::new(strategy, source.words());

    let words = source.words();
    let targets = &words[..limit.unwrap_or(words.len()).min(words.len())];

    println!("Running benchmark on {} words with the {name} strategy...", targets.len());

    let result = run_benchmark(&solver, targets, attempts, true);
    print_benchmark_result(&result, name);
}
