//! Blocking wait until the source folder has something to merge

use std::io;
use std::path::Path;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::debug;
use crate::error::Result;
use crate::labels::Language;
use crate::merge::has_source_files;

/// What the user asked for while the source folder was empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyChoice {
    /// Look at the folder again
    Rescan,
    /// Give up and exit
    Quit,
}

/// Source of the user's rescan/quit decisions
pub trait KeyPrompt {
    /// Show `message` and block until the user decides
    fn wait_for_choice(&mut self, message: &str) -> Result<KeyChoice>;
}

/// Map a key press to a choice; other keys are ignored
pub fn choice_for_key(key: &KeyEvent) -> Option<KeyChoice> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(KeyChoice::Rescan),
        KeyCode::Char(' ') | KeyCode::Esc => Some(KeyChoice::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyChoice::Quit)
        }
        _ => None,
    }
}

/// Restores cooked mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Reads single key presses from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl KeyPrompt for TerminalPrompt {
    fn wait_for_choice(&mut self, message: &str) -> Result<KeyChoice> {
        eprintln!("{message}");

        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(choice) = choice_for_key(&key) {
                    return Ok(choice);
                }
            }
        }
    }
}

/// Block until `source_dir` holds at least one file
///
/// Returns `false` if the user chose to quit instead.
pub fn wait_for_sources(
    source_dir: &Path,
    language: Language,
    prompt: &mut dyn KeyPrompt,
) -> Result<bool> {
    let message = language.empty_source_prompt(&source_dir.display().to_string());

    while !has_source_files(source_dir)? {
        match prompt.wait_for_choice(&message)? {
            KeyChoice::Rescan => debug!(dir = %source_dir.display(), "rescanning source folder"),
            KeyChoice::Quit => return Ok(false),
        }
    }

    Ok(true)
}
