use tracing::warn;

use crate::directory::Navigator;
use crate::input::{self, Command};
use crate::ui::ColorScheme;

/// Application state
pub struct App {
    pub navigator: Navigator,
    pub color_scheme: ColorScheme,

    /// Message from the last failed command, cleared by the next success
    pub last_error: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(navigator: Navigator, color_scheme: ColorScheme) -> Self {
        Self {
            navigator,
            color_scheme,
            last_error: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Handle a command from input
    pub fn handle_command(&mut self, cmd: Command) {
        // Any key closes help; quit still quits.
        if self.show_help {
            self.show_help = false;
            if cmd != Command::Quit {
                return;
            }
        }

        if cmd == Command::ToggleHelp {
            self.show_help = true;
            return;
        }

        match input::apply(cmd, &mut self.navigator) {
            Ok(exit) => {
                self.last_error = None;
                self.should_quit = exit;
            }
            Err(e) => {
                warn!(command = ?cmd, error = %e, "command failed");
                self.last_error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::SizeAggregator;
    use std::fs;
    use tempfile::TempDir;

    fn app_in(path: &std::path::Path) -> App {
        let navigator = Navigator::new(path, SizeAggregator::new(1).unwrap()).unwrap();
        App::new(navigator, ColorScheme::default())
    }

    #[test]
    fn test_quit() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(temp_dir.path());

        app.handle_command(Command::Noop);
        assert!(!app.should_quit);

        app.handle_command(Command::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_error_is_kept_until_next_success() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("file"), "x").unwrap();
        let mut app = app_in(temp_dir.path());

        app.handle_command(Command::IntoSelected);
        assert!(app.last_error.as_deref().unwrap().contains("not a directory"));
        assert_eq!(app.navigator.entries().len(), 1);

        app.handle_command(Command::SelectNext);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn test_help_toggle_swallows_next_key() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("victim"), "x").unwrap();
        let mut app = app_in(temp_dir.path());

        app.handle_command(Command::ToggleHelp);
        assert!(app.show_help);

        app.handle_command(Command::RemoveSelected);
        assert!(!app.show_help);
        assert!(temp_dir.path().join("victim").exists());
    }

    #[test]
    fn test_quit_from_help() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(temp_dir.path());

        app.handle_command(Command::ToggleHelp);
        app.handle_command(Command::Quit);

        assert!(app.should_quit);
    }

    #[test]
    fn test_delete_then_browse() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        fs::create_dir(root.join("only")).unwrap();
        let mut app = app_in(&root);

        app.handle_command(Command::RemoveSelected);

        assert!(app.last_error.is_none());
        assert!(app.navigator.entries().is_empty());
        assert!(!root.join("only").exists());
    }
}
