//! TUI application state and logic

use crate::core::{Game, Guess, GuessOutcome, Outcome, Tally};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Number of messages kept in the log
pub const MESSAGE_HISTORY: usize = 10;

/// Application state
pub struct App<'a> {
    pub source: &'a WordSource,
    rng: StdRng,
    pub game: Game,
    pub max_attempts: usize,
    pub messages: Vec<Message>,
    pub stats: Tally,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver(Outcome),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(source: &'a WordSource, mut rng: StdRng, max_attempts: usize) -> Self {
        let game = Game::new(source.pick(&mut rng).clone(), max_attempts);

        Self {
            source,
            rng,
            game,
            max_attempts,
            messages: vec![Message {
                text: "Welcome to Hangman! Type a letter to guess.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Tally::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Start a fresh round with a newly picked word
    pub fn new_game(&mut self) {
        let secret = self.source.pick(&mut self.rng).clone();
        self.game = Game::new(secret, self.max_attempts);
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Handle a typed character
    pub fn handle_char(&mut self, ch: char) {
        match self.input_mode {
            InputMode::GameOver(_) => match ch.to_ascii_lowercase() {
                'y' => self.new_game(),
                'n' | 'q' => self.should_quit = true,
                _ => self.add_message("Play again? Press 'y' or 'n'.", MessageStyle::Info),
            },
            InputMode::Guessing => self.handle_guess(ch),
        }
    }

    fn handle_guess(&mut self, ch: char) {
        let guess = match Guess::from_char(ch) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&format!("Invalid input. {e}."), MessageStyle::Error);
                return;
            }
        };

        let outcome = self.game.guess(guess);
        debug!(%guess, ?outcome, "tui guess");

        match outcome {
            GuessOutcome::Correct { revealed } => {
                let noun = if revealed == 1 { "letter" } else { "letters" };
                self.add_message(
                    &format!("Good guess! '{guess}' revealed {revealed} {noun}."),
                    MessageStyle::Success,
                );
            }
            GuessOutcome::Incorrect => {
                self.add_message(&format!("Incorrect guess: '{guess}'."), MessageStyle::Error);
            }
            GuessOutcome::AlreadyGuessed => {
                self.add_message(
                    &format!("You already guessed '{guess}'."),
                    MessageStyle::Warning,
                );
            }
            GuessOutcome::GameOver => return,
        }

        if let Some(outcome) = self.game.outcome() {
            self.finish(outcome);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.stats.record(outcome);
        self.input_mode = InputMode::GameOver(outcome);

        let word = self.game.secret().text().to_uppercase();
        match outcome {
            Outcome::Won => self.add_message(
                &format!("🎉 You guessed the word: {word}"),
                MessageStyle::Success,
            ),
            Outcome::Lost => self.add_message(
                &format!("💀 Game over! The word was: {word}"),
                MessageStyle::Error,
            ),
        }
        self.add_message("Play again? Press 'y' or 'n'.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MESSAGE_HISTORY {
            let excess = self.messages.len() - MESSAGE_HISTORY;
            self.messages.drain(..excess);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Tally> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<Tally> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => app.handle_char(c),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn source() -> WordSource {
        WordSource::new(words_from_slice(&["cat"])).unwrap()
    }

    fn type_keys(app: &mut App, keys: &str) {
        for ch in keys.chars() {
            app.handle_char(ch);
        }
    }

    #[test]
    fn winning_switches_to_game_over() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(1), 6);

        type_keys(&mut app, "cat");

        assert_eq!(app.input_mode, InputMode::GameOver(Outcome::Won));
        assert_eq!(app.stats.games_won, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("CAT")));
    }

    #[test]
    fn losing_reveals_word() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(1), 6);

        type_keys(&mut app, "xyzwqj");

        assert_eq!(app.input_mode, InputMode::GameOver(Outcome::Lost));
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("The word was: CAT")));
    }

    #[test]
    fn invalid_key_costs_nothing() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(1), 6);

        type_keys(&mut app, "5!");

        assert_eq!(app.game.attempts_left(), 6);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn message_log_is_bounded() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(1), 6);

        for _ in 0..500 {
            app.handle_char('5');
        }

        assert_eq!(app.messages.len(), MESSAGE_HISTORY);
        assert_eq!(app.game.attempts_left(), 6);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn repeated_wrong_key_warns() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(1), 6);

        type_keys(&mut app, "ee");

        assert_eq!(app.game.attempts_left(), 5);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Warning)
        );
    }

    #[test]
    fn replay_after_game_over() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(1), 6);

        type_keys(&mut app, "caty");

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.masked('_'), "___");
        assert!(!app.should_quit);
    }

    #[test]
    fn decline_replay_quits() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(1), 6);

        type_keys(&mut app, "catn");

        assert!(app.should_quit);
    }

    #[test]
    fn letters_q_and_n_are_guesses_while_playing() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(1), 6);

        type_keys(&mut app, "qn");

        assert!(!app.should_quit);
        assert_eq!(app.game.wrong_guesses(), b"qn");
    }
}
