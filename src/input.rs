//! Input handling for the liberator browser.
//!
//! A single character maps to at most one [`Command`]; [`apply`] then runs
//! that command against anything implementing [`Navigate`].

use std::io::Read;

use crossterm::event::{KeyCode, KeyEvent};

use crate::directory::{Navigator, NavigatorError};

/// Commands that can be issued by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move selection down.
    SelectNext,
    /// Move selection up.
    SelectPrevious,
    /// Enter the selected directory.
    IntoSelected,
    /// Go to the parent directory.
    ToParent,
    /// Delete the selected file or directory.
    RemoveSelected,
    /// Show or hide the key help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
    /// No operation - key was not recognized.
    Noop,
}

/// Navigation actions the input layer can trigger.
pub trait Navigate {
    fn select_next_entry(&mut self);
    fn select_previous_entry(&mut self);
    fn into_selected_entry(&mut self) -> Result<(), NavigatorError>;
    fn to_parent_directory(&mut self) -> Result<(), NavigatorError>;
    fn remove_selected_entry(&mut self) -> Result<(), NavigatorError>;
}

impl Navigate for Navigator {
    fn select_next_entry(&mut self) {
        Navigator::select_next_entry(self)
    }

    fn select_previous_entry(&mut self) {
        Navigator::select_previous_entry(self)
    }

    fn into_selected_entry(&mut self) -> Result<(), NavigatorError> {
        Navigator::into_selected_entry(self)
    }

    fn to_parent_directory(&mut self) -> Result<(), NavigatorError> {
        Navigator::to_parent_directory(self)
    }

    fn remove_selected_entry(&mut self) -> Result<(), NavigatorError> {
        Navigator::remove_selected_entry(self)
    }
}

/// Map a single character to its command.
pub fn map_char(c: char) -> Command {
    match c {
        'j' => Command::SelectNext,
        'k' => Command::SelectPrevious,
        '\r' | '\n' | 'l' => Command::IntoSelected,
        'h' => Command::ToParent,
        'x' => Command::RemoveSelected,
        '?' => Command::ToggleHelp,
        'q' => Command::Quit,
        _ => Command::Noop,
    }
}

/// Handle a terminal key event and return the corresponding command.
///
/// Arrow keys, Enter, Backspace and Esc are folded onto the same commands as
/// their character equivalents.
pub fn handle_key(key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char(c) => map_char(c),
        KeyCode::Down => Command::SelectNext,
        KeyCode::Up => Command::SelectPrevious,
        KeyCode::Enter | KeyCode::Right => Command::IntoSelected,
        KeyCode::Left | KeyCode::Backspace => Command::ToParent,
        KeyCode::Esc => Command::Quit,
        _ => Command::Noop,
    }
}

/// Run `command` against `navigator`.
///
/// Returns `Ok(true)` when the command asks to exit. Commands that are not
/// navigation actions are no-ops here.
pub fn apply<N: Navigate>(command: Command, navigator: &mut N) -> Result<bool, NavigatorError> {
    match command {
        Command::SelectNext => navigator.select_next_entry(),
        Command::SelectPrevious => navigator.select_previous_entry(),
        Command::IntoSelected => navigator.into_selected_entry()?,
        Command::ToParent => navigator.to_parent_directory()?,
        Command::RemoveSelected => navigator.remove_selected_entry()?,
        Command::Quit => return Ok(true),
        Command::ToggleHelp | Command::Noop => {}
    }
    Ok(false)
}

/// Read one UTF-8 encoded character from `source`.
///
/// Returns `None` on end of input, a read error, or invalid UTF-8.
pub fn read_char(mut source: impl Read) -> Option<char> {
    let mut buf = [0u8; 4];
    source.read_exact(&mut buf[..1]).ok()?;

    let width = match buf[0] {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return None,
    };
    source.read_exact(&mut buf[1..width]).ok()?;

    std::str::from_utf8(&buf[..width]).ok()?.chars().next()
}
