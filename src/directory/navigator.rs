//! Stateful directory navigation and view windowing.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use super::lister::list_entries;
use super::size::SizeAggregator;
use super::{Entry, NavigatorError};
use crate::view::{format_size, Row};

/// Tracks the current directory, its entries, the selection and the last
/// rendered window.
///
/// Every operation either succeeds and updates the state as a whole, or fails
/// and leaves it untouched. Entries are a snapshot taken when the directory
/// was entered and are not refreshed on external changes.
pub struct Navigator {
    current_path: PathBuf,
    entries: Vec<Entry>,
    selected_index: usize,
    view_start: usize,
    view_end: usize,
    aggregator: SizeAggregator,
}

impl Navigator {
    /// Create a navigator showing `path`.
    ///
    /// Fails with [`NavigatorError::InvalidPath`] if `path` is not a directory.
    pub fn new(path: impl AsRef<Path>, aggregator: SizeAggregator) -> Result<Self, NavigatorError> {
        let mut navigator = Self {
            current_path: PathBuf::new(),
            entries: Vec::new(),
            selected_index: 0,
            view_start: 0,
            view_end: 0,
            aggregator,
        };
        navigator.set_working_directory(path)?;
        Ok(navigator)
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Entries as of the last directory read. Does not touch the disk.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The `(start, end)` window stored by the last call to [`Navigator::view`].
    pub fn view_window(&self) -> (usize, usize) {
        (self.view_start, self.view_end)
    }

    /// Switch to `path`, re-read its entries and reset selection and window.
    pub fn set_working_directory(&mut self, path: impl AsRef<Path>) -> Result<(), NavigatorError> {
        let path = normalize(path.as_ref());

        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_dir() => {}
            _ => return Err(NavigatorError::InvalidPath { path }),
        }

        let entries = list_entries(&path, &self.aggregator);
        info!(path = %path.display(), entries = entries.len(), "changed directory");

        self.current_path = path;
        self.entries = entries;
        self.selected_index = 0;
        self.view_start = 0;
        self.view_end = 0;
        Ok(())
    }

    pub fn select_next_entry(&mut self) {
        if self.selected_index + 1 < self.entries.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_previous_entry(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn selected_entry(&self) -> Result<&Entry, NavigatorError> {
        self.entries
            .get(self.selected_index)
            .ok_or(NavigatorError::NoSelection)
    }

    /// Enter the selected entry if it is a directory.
    pub fn into_selected_entry(&mut self) -> Result<(), NavigatorError> {
        let entry = self.selected_entry()?;
        let path = self.current_path.join(&entry.name);

        if !entry.is_directory {
            return Err(NavigatorError::NotADirectory { path });
        }
        self.set_working_directory(path)
    }

    /// Move to the parent directory. At the root this stays at the root.
    pub fn to_parent_directory(&mut self) -> Result<(), NavigatorError> {
        let parent = parent_of(&self.current_path)?;
        self.set_working_directory(parent)
    }

    /// Delete the selected entry from disk and re-read the directory.
    ///
    /// Directories are removed recursively. On failure the entries are not
    /// refreshed and may be stale relative to the disk.
    pub fn remove_selected_entry(&mut self) -> Result<(), NavigatorError> {
        let entry = self.selected_entry()?;
        let path = self.current_path.join(&entry.name);

        let result = if entry.is_directory {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };

        if let Err(source) = result {
            warn!(path = %path.display(), error = %source, "delete failed");
            return Err(NavigatorError::RemovalFailed { path, source });
        }
        info!(path = %path.display(), "deleted");

        let current = self.current_path.clone();
        self.set_working_directory(current)
    }

    /// Build the rows for a page of at most `max_rows` entries plus the
    /// status line.
    ///
    /// The previous window is kept while it still contains the selection and
    /// has the right height, so moving within a page does not scroll.
    /// Otherwise the window is recomputed with the selection as the last
    /// visible row, or as the first page when the selection fits there.
    pub fn view(&mut self, max_rows: usize) -> (Vec<Row>, String) {
        let status = self.current_path.display().to_string();
        let size = max_rows.min(self.entries.len());

        if size == 0 {
            self.view_start = 0;
            self.view_end = 0;
            return (Vec::new(), status);
        }

        let selected = self.selected_index;
        let reusable = (self.view_start..self.view_end).contains(&selected)
            && self.view_end - self.view_start == size;

        if !reusable {
            if selected >= size {
                self.view_start = selected + 1 - size;
                self.view_end = selected + 1;
            } else {
                self.view_start = 0;
                self.view_end = size;
            }
            debug!(start = self.view_start, end = self.view_end, "recomputed view window");
        }

        let rows = self.entries[self.view_start..self.view_end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| Row {
                name: if entry.is_directory {
                    format!("{}/", entry.name)
                } else {
                    entry.name.clone()
                },
                size: format_size(entry.size),
                highlighted: self.view_start + offset == selected,
                is_directory: entry.is_directory,
            })
            .collect();

        (rows, status)
    }
}

/// Strip a single trailing separator, keeping the root intact. Relative
/// paths are made absolute against the process working directory.
fn normalize(path: &Path) -> PathBuf {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    match path.to_str() {
        Some(s) if s.len() > 1 && s.ends_with(std::path::MAIN_SEPARATOR) => {
            PathBuf::from(&s[..s.len() - 1])
        }
        _ => path,
    }
}

fn parent_of(path: &Path) -> Result<PathBuf, NavigatorError> {
    match path.components().next_back() {
        // Lexical parent keeps `cd child; cd ..` a round trip, even through
        // symlinks.
        Some(Component::Normal(_)) => Ok(path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| path.to_path_buf())),
        Some(Component::RootDir) | Some(Component::Prefix(_)) | None => Ok(path.to_path_buf()),
        _ => {
            let joined = path.join("..");
            fs::canonicalize(&joined).map_err(|_| NavigatorError::InvalidPath { path: joined })
        }
    }
}
