//! Directory listing, size aggregation and navigation.
//!
//! Listing and sizing are best-effort: unreadable directories and entries
//! count as empty rather than failing. Only the [`Navigator`] operations that
//! change the working directory report errors.

mod lister;
mod navigator;
mod size;

pub use lister::list_entries;
pub use navigator::Navigator;
pub use size::SizeAggregator;

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Snapshot of one child of a directory.
///
/// For directories, `size` is the recursive sum of every descendant file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub size: u64,
    #[serde(rename = "is_dir")]
    pub is_directory: bool,
}

impl Entry {
    pub fn new(name: impl Into<String>, size: u64, is_directory: bool) -> Self {
        Self {
            name: name.into(),
            size,
            is_directory,
        }
    }
}

/// Errors surfaced by [`Navigator`] operations.
#[derive(Error, Debug)]
pub enum NavigatorError {
    /// The target path is missing or is not a directory
    #[error("invalid path: {path}")]
    InvalidPath {
        /// The path that could not be used as a working directory
        path: PathBuf,
    },

    /// Tried to enter an entry that is not a directory
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path of the selected entry
        path: PathBuf,
    },

    /// Deleting the selected entry failed
    #[error("could not remove {path}: {source}")]
    RemovalFailed {
        /// The path that could not be removed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The operation needs a selected entry but the directory is empty
    #[error("no entry selected")]
    NoSelection,
}
