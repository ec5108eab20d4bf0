//! Pure scan settings.
//!
//! Clap-free, so library consumers can drive a scan without the CLI.

use lexstat_content::DEFAULT_EXTENSIONS;
use lexstat_walk::{ExtensionFilter, WalkOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Directory to analyze (defaults to `.`).
    pub root: String,
    /// Extensions that qualify a file, with or without a leading dot.
    pub extensions: Vec<String>,
    pub include_hidden: bool,
    /// Honor `.gitignore` / `.ignore` files.
    pub respect_ignore: bool,
    pub follow_links: bool,
    /// Read at most this many bytes per file.
    pub max_file_bytes: Option<usize>,
    /// Recompute even when the path inventory is unchanged.
    pub force: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            include_hidden: true,
            respect_ignore: false,
            follow_links: false,
            max_file_bytes: None,
            force: false,
        }
    }
}

impl ScanSettings {
    pub fn for_root(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(&self.extensions)
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            include_hidden: self.include_hidden,
            respect_ignore: self.respect_ignore,
            follow_links: self.follow_links,
        }
    }
}
