//! Console game mode
//!
//! Line-based hangman over any reader/writer pair, plus the replay loop.

use crate::core::{Game, Guess, GuessOutcome, Outcome, SecretWord, Tally};
use crate::output::formatters::{format_wrong_guesses, gallows, gallows_stage, spaced_mask};
use crate::wordlists::WordSource;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// One console player: reads guesses from `input` and reports to `output`
pub struct Session<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W, max_attempts: usize) -> Self {
        Self {
            input,
            output,
            max_attempts,
        }
    }

    /// Play one round against `secret` until it is won or lost
    ///
    /// Invalid tokens and repeated wrong letters are reported and cost nothing.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing fails, including
    /// `UnexpectedEof` if input ends before the round is over.
    pub fn play(&mut self, secret: &SecretWord) -> io::Result<Outcome> {
        let mut game = Game::new(secret.clone(), self.max_attempts);
        info!(
            letters = secret.letter_count(),
            max_attempts = game.max_attempts(),
            "session started"
        );

        writeln!(self.output, "{}", "Welcome to Hangman!".bright_cyan().bold())?;

        loop {
            if let Some(outcome) = game.outcome() {
                self.print_result(&game, outcome)?;
                info!(?outcome, wrong = game.wrong_guesses().len(), "session finished");
                return Ok(outcome);
            }

            self.print_state(&game)?;

            let token = self.read_token("Enter your guess")?;
            let guess = match Guess::parse(&token) {
                Ok(guess) => guess,
                Err(e) => {
                    writeln!(self.output, "{} {e}.", "Invalid input.".red())?;
                    continue;
                }
            };

            let outcome = game.guess(guess);
            debug!(%guess, ?outcome, attempts_left = game.attempts_left(), "guess applied");

            match outcome {
                GuessOutcome::Correct { .. } => {
                    writeln!(self.output, "{}", "Good guess!".green())?;
                }
                GuessOutcome::Incorrect => {
                    writeln!(self.output, "{}", "Incorrect guess.".red())?;
                }
                GuessOutcome::AlreadyGuessed => {
                    writeln!(self.output, "{}", "You already guessed that letter.".yellow())?;
                }
                GuessOutcome::GameOver => {}
            }
        }
    }

    /// Ask whether to play another round
    ///
    /// Only an answer starting with `y` or `Y` means yes. End of input means no.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing fails.
    pub fn ask_replay(&mut self) -> io::Result<bool> {
        writeln!(self.output)?;
        match self.read_token("Do you want to play again? (y/n)") {
            Ok(answer) => Ok(answer
                .chars()
                .next()
                .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Print the closing message with the running tally
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn print_farewell(&mut self, tally: &Tally) -> io::Result<()> {
        writeln!(
            self.output,
            "\nGames played: {} | Won: {} | Lost: {}",
            tally.games_played,
            tally.games_won,
            tally.games_lost()
        )?;
        writeln!(self.output, "{}", "Thank you for playing Hangman!".bright_cyan())
    }

    /// Output written so far
    pub const fn output(&self) -> &W {
        &self.output
    }

    fn print_state(&mut self, game: &Game) -> io::Result<()> {
        let stage = gallows_stage(game.wrong_guesses().len(), game.max_attempts());

        writeln!(self.output)?;
        for line in gallows(stage) {
            writeln!(self.output, "{line}")?;
        }
        writeln!(
            self.output,
            "Current word: {}",
            spaced_mask(game).bright_yellow().bold()
        )?;
        writeln!(
            self.output,
            "Wrong guesses: {}",
            format_wrong_guesses(game.wrong_guesses()).red()
        )?;
        writeln!(self.output, "Attempts left: {}", game.attempts_left())
    }

    fn print_result(&mut self, game: &Game, outcome: Outcome) -> io::Result<()> {
        let word = game.secret().text();
        match outcome {
            Outcome::Won => writeln!(
                self.output,
                "\n{} {}",
                "Congratulations! You've guessed the word:".green().bold(),
                word.bright_yellow().bold()
            ),
            Outcome::Lost => {
                writeln!(self.output)?;
                for line in gallows(gallows_stage(game.wrong_guesses().len(), game.max_attempts())) {
                    writeln!(self.output, "{line}")?;
                }
                writeln!(
                    self.output,
                    "\n{} {}",
                    "Game Over! The word was:".red().bold(),
                    word.bright_yellow().bold()
                )
            }
        }
    }

    fn read_token(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            ));
        }

        Ok(line.trim().to_string())
    }
}

/// Play rounds with fresh words until the player declines a replay
///
/// # Errors
///
/// Returns an I/O error from the session.
pub fn run_session_loop<R, W, G>(
    session: &mut Session<R, W>,
    source: &WordSource,
    rng: &mut G,
) -> io::Result<Tally>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let mut tally = Tally::default();

    loop {
        let secret = source.pick(rng);
        let outcome = session.play(secret)?;
        tally.record(outcome);

        if !session.ask_replay()? {
            break;
        }
    }

    session.print_farewell(&tally)?;
    Ok(tally)
}

/// Run the console game on stdin/stdout
///
/// # Errors
///
/// Returns an I/O error if the terminal cannot be read or written.
pub fn run_simple<G: Rng>(
    source: &WordSource,
    rng: &mut G,
    max_attempts: usize,
) -> io::Result<Tally> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), max_attempts);
    run_session_loop(&mut session, source, rng)
}
