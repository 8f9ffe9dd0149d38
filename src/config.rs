//! Runtime configuration assembled from the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ui::ColorScheme;

/// Settings for one browsing session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to start browsing in
    pub start_path: PathBuf,
    /// Size aggregation worker threads (0 for one per CPU)
    pub workers: usize,
    /// Name of the color scheme
    pub color_scheme: String,
    /// Draw without colors
    pub no_color: bool,
    /// Print the start directory as JSON instead of opening the browser
    pub json: bool,
    /// Where to write logs, if anywhere
    pub log_file: Option<PathBuf>,
    /// Default log filter directive
    pub log_level: String,
}

impl Config {
    /// Create a config with default values
    pub fn new(start_path: PathBuf) -> Self {
        Self {
            start_path,
            workers: 0,
            color_scheme: "default".to_string(),
            no_color: false,
            json: false,
            log_file: None,
            log_level: "info".to_string(),
        }
    }

    /// Set worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set color scheme name
    pub fn with_color_scheme(mut self, name: impl Into<String>, no_color: bool) -> Self {
        self.color_scheme = name.into();
        self.no_color = no_color;
        self
    }

    /// Set JSON output mode
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Set log destination and level
    pub fn with_logging(mut self, log_file: Option<PathBuf>, level: impl Into<String>) -> Self {
        self.log_file = log_file;
        self.log_level = level.into();
        self
    }

    /// Resolve the start path to an absolute, symlink-free directory path.
    pub fn resolve(mut self) -> Result<Self> {
        self.start_path = canonical_dir(&self.start_path)?;
        Ok(self)
    }

    /// The color scheme to draw with.
    pub fn colors(&self) -> ColorScheme {
        if self.no_color {
            return ColorScheme::monochrome();
        }
        match self.color_scheme.as_str() {
            "light" => ColorScheme::light(),
            "colorblind" => ColorScheme::colorblind(),
            _ => ColorScheme::default(),
        }
    }
}

fn canonical_dir(path: &Path) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .with_context(|| format!("cannot open {}", path.display()))?;

    if !resolved.is_dir() {
        anyhow::bail!("not a directory: {}", resolved.display());
    }
    Ok(resolved)
}
