//! Interactive TUI mode
//!
//! Full-screen hangman driven by single key presses.

mod app;
mod rendering;

pub use app::{App, InputMode, MESSAGE_HISTORY, Message, MessageStyle, run_tui};
