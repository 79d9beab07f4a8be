//! Benchmark command
//!
//! Plays every word in a list with an automated player and collects statistics.

use crate::core::{Game, Outcome, SecretWord};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_wrong: f64,
    pub max_wrong: usize,
    pub max_attempts: usize,
    /// Number of games per wrong-guess count
    pub distribution: FxHashMap<usize, usize>,
    pub failed_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Win percentage, 0 for an empty run
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_words as f64 * 100.0
        }
    }
}

fn progress_bar(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Run benchmark on a set of target words
///
/// Games are independent and played in parallel.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    target_words: &[SecretWord],
    max_attempts: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let pb = progress_bar(target_words.len(), show_progress);

    let games: Vec<Game> = target_words
        .par_iter()
        .map(|target| {
            let mut game = Game::new(target.clone(), max_attempts);
            solver.play_out(&mut game);
            pb.inc(1);
            game
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut wins = 0;
    let mut total_wrong = 0;
    let mut max_wrong = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failed_words = Vec::new();

    for game in &games {
        let wrong = game.wrong_guesses().len();
        total_wrong += wrong;
        max_wrong = max_wrong.max(wrong);
        *distribution.entry(wrong).or_insert(0) += 1;

        if game.outcome() == Some(Outcome::Lost) {
            failed_words.push(game.secret().text().to_string());
        } else {
            wins += 1;
        }
    }

    let duration = start.elapsed();
    let total_words = games.len();
    info!(total_words, wins, ?duration, "benchmark finished");

    BenchmarkResult {
        total_words,
        wins,
        losses: total_words - wins,
        average_wrong: if total_words == 0 {
            0.0
        } else {
            total_wrong as f64 / total_words as f64
        },
        max_wrong,
        max_attempts: games.first().map_or(max_attempts.max(1), Game::max_attempts),
        distribution,
        failed_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
