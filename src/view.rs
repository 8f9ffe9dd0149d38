//! Render-ready rows produced by the navigator.

/// One visible line of the directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Entry name, with a trailing `/` for directories
    pub name: String,
    /// Human-readable size
    pub size: String,
    /// Whether this row is the current selection
    pub highlighted: bool,
    /// Whether to draw this row in the directory color
    pub is_directory: bool,
}

/// Format a byte size into a human-readable string.
///
/// # Arguments
/// * `bytes` - The size in bytes
///
/// # Returns
/// A formatted string like "1.5 GB", "256.0 KB" or "12 B".
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
        assert_eq!(format_size(2 * 1024 * 1024 * 1024 * 1024), "2.0 TB");
    }
}
