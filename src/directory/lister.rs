//! Directory listing with per-entry sizes.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::size::SizeAggregator;
use super::Entry;

/// List the children of `path` in filesystem enumeration order.
///
/// Files report their own length; directories report the recursive size
/// computed by `aggregator`. `.` and `..` never appear. A directory that
/// cannot be read yields an empty list, and a child whose metadata cannot be
/// read is listed as an empty file.
pub fn list_entries(path: &Path, aggregator: &SizeAggregator) -> Vec<Entry> {
    let read_dir = match fs::read_dir(path) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unreadable directory listed as empty");
            return Vec::new();
        }
    };

    read_dir
        .filter_map(|e| e.ok())
        .map(|dir_entry| {
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            let child_path = dir_entry.path();

            // Follow symlinks like a plain stat would; a dangling link
            // falls back to the link itself.
            let metadata = fs::metadata(&child_path).or_else(|_| fs::symlink_metadata(&child_path));

            match metadata {
                Ok(metadata) if metadata.is_dir() => {
                    Entry::new(name, aggregator.compute_size(&child_path), true)
                }
                Ok(metadata) => Entry::new(name, metadata.len(), false),
                Err(err) => {
                    debug!(path = %child_path.display(), error = %err, "unreadable entry sized as 0");
                    Entry::new(name, 0, false)
                }
            }
        })
        .collect()
}
