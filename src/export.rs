use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::directory::{list_entries, Entry, SizeAggregator};

/// A directory listing as written by `--json`
#[derive(Serialize)]
pub struct ExportListing<'a> {
    pub path: String,
    pub entries: &'a [Entry],
}

/// List `path` and write it as pretty JSON
///
/// # Arguments
/// * `path` - Directory to list
/// * `aggregator` - Sizes the child directories
/// * `writer` - Output writer for the JSON
pub fn export_json(
    path: &Path,
    aggregator: &SizeAggregator,
    writer: &mut impl Write,
) -> Result<(), std::io::Error> {
    let entries = list_entries(path, aggregator);
    let listing = ExportListing {
        path: path.display().to_string(),
        entries: &entries,
    };

    serde_json::to_writer_pretty(writer, &listing)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    #[test]
    fn test_export_listing() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("large.txt"), vec![0u8; 1000]).unwrap();
        std::fs::create_dir(temp_dir.path().join("subdir")).unwrap();
        std::fs::write(temp_dir.path().join("subdir/medium.txt"), vec![0u8; 500]).unwrap();

        let mut buffer = Vec::new();
        export_json(temp_dir.path(), &SizeAggregator::new(2).unwrap(), &mut buffer).unwrap();

        let parsed: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["path"], temp_dir.path().display().to_string());

        let entries = parsed["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        let subdir = entries.iter().find(|e| e["name"] == "subdir").unwrap();
        assert_eq!(subdir["size"], 500);
        assert_eq!(subdir["is_dir"], true);
    }

    #[test]
    fn test_export_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let mut buffer = Vec::new();
        export_json(temp_dir.path(), &SizeAggregator::new(1).unwrap(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"entries\": []"));
    }
}
