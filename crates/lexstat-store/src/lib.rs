//! # lexstat-store
//!
//! **Tier 3 (Persistence)**
//!
//! Keeps the latest summary per file and per directory. Writes are upserts:
//! the last write for a path wins and repeating a write is a no-op.
//!
//! Records are stored by normalized path and can also be looked up by slug
//! (see [`slug_for`]); the walk root is always reachable as `root`.
//!
//! ## What belongs here
//! * The [`SummaryStore`] trait
//! * [`MemoryStore`] and the file-backed [`JsonStore`]
//!
//! ## What does NOT belong here
//! * Computing summaries (use lexstat-core)
//! * Path normalization (use lexstat-walk)

#![forbid(unsafe_code)]

mod document;
mod json;

use std::path::PathBuf;

use lexstat_types::{DirectorySummary, FileSummary, PathInventory};
use thiserror::Error;

pub use document::StoreDocument;
pub use json::JsonStore;

/// Slug under which the walk root is always reachable.
pub const ROOT_SLUG: &str = "root";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Store {path} has schema version {found}, expected {expected}")]
    SchemaVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

/// Persistence collaborator for computed summaries.
pub trait SummaryStore {
    /// Start a fresh run for `root`: previous records are dropped.
    fn begin(&mut self, root: &str);

    /// Normalized path of the root of the last run, if any.
    fn root_path(&self) -> Option<&str>;

    fn upsert_file(&mut self, summary: FileSummary) -> Result<(), StoreError>;

    fn upsert_directory(&mut self, summary: DirectorySummary) -> Result<(), StoreError>;

    /// Look a file up by normalized path or slug.
    fn file(&self, key: &str) -> Option<&FileSummary>;

    /// Look a directory up by normalized path or slug (`root` for the walk root).
    fn directory(&self, key: &str) -> Option<&DirectorySummary>;

    /// All files, sorted by path.
    fn files(&self) -> Vec<&FileSummary>;

    /// All directories, sorted by path.
    fn directories(&self) -> Vec<&DirectorySummary>;

    /// The persisted file and directory paths.
    fn inventory(&self) -> PathInventory;

    /// Make every upsert durable.
    fn flush(&mut self) -> Result<(), StoreError>;

    fn root(&self) -> Option<&DirectorySummary> {
        self.directory(ROOT_SLUG)
    }
}

/// URL-safe key for a normalized path: `.`, `/` and `\` become `-`, leading
/// and trailing dashes are dropped. The walk root maps to [`ROOT_SLUG`].
pub fn slug_for(path: &str, root: Option<&str>) -> String {
    if root == Some(path) {
        return ROOT_SLUG.to_string();
    }
    let slug: String = path
        .chars()
        .map(|c| match c {
            '.' | '/' | '\\' => '-',
            other => other,
        })
        .collect();
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        ROOT_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    doc: StoreDocument,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &StoreDocument {
        &self.doc
    }
}

impl SummaryStore for MemoryStore {
    fn begin(&mut self, root: &str) {
        self.doc.reset(root);
    }

    fn root_path(&self) -> Option<&str> {
        self.doc.root.as_deref()
    }

    fn upsert_file(&mut self, summary: FileSummary) -> Result<(), StoreError> {
        self.doc.put_file(summary);
        Ok(())
    }

    fn upsert_directory(&mut self, summary: DirectorySummary) -> Result<(), StoreError> {
        self.doc.put_directory(summary);
        Ok(())
    }

    fn file(&self, key: &str) -> Option<&FileSummary> {
        self.doc.file(key)
    }

    fn directory(&self, key: &str) -> Option<&DirectorySummary> {
        self.doc.directory(key)
    }

    fn files(&self) -> Vec<&FileSummary> {
        self.doc.files.values().collect()
    }

    fn directories(&self) -> Vec<&DirectorySummary> {
        self.doc.directories.values().collect()
    }

    fn inventory(&self) -> PathInventory {
        self.doc.inventory()
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_replaces_separators_and_dots() {
        assert_eq!(slug_for("docs/a.txt", Some(".")), "docs-a-txt");
        assert_eq!(slug_for("docs\\sub", None), "docs-sub");
        assert_eq!(slug_for("/abs/dir", None), "abs-dir");
    }

    #[test]
    fn slug_for_root_is_root() {
        assert_eq!(slug_for(".", Some(".")), ROOT_SLUG);
        assert_eq!(slug_for("/data/corpus", Some("/data/corpus")), ROOT_SLUG);
        assert_eq!(slug_for(".", None), ROOT_SLUG);
    }

    #[test]
    fn memory_store_upsert_is_last_write_wins() {
        let mut store = MemoryStore::new();
        store.begin(".");
        let mut summary = FileSummary {
            path: "a.txt".into(),
            ..Default::default()
        };
        store.upsert_file(summary.clone()).unwrap();
        summary.content.word_count = 7;
        store.upsert_file(summary.clone()).unwrap();
        store.upsert_file(summary).unwrap();

        assert_eq!(store.files().len(), 1);
        assert_eq!(store.file("a.txt").unwrap().content.word_count, 7);
        assert_eq!(store.file("a-txt").unwrap().content.word_count, 7);
    }

    #[test]
    fn memory_store_root_lookup() {
        let mut store = MemoryStore::new();
        store.begin("corpus");
        store
            .upsert_directory(DirectorySummary {
                path: "corpus".into(),
                file_count: 2,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(store.root().unwrap().file_count, 2);
        assert_eq!(store.directory("corpus").unwrap().file_count, 2);
        assert_eq!(store.root_path(), Some("corpus"));
    }

    #[test]
    fn begin_drops_previous_records() {
        let mut store = MemoryStore::new();
        store.begin(".");
        store
            .upsert_file(FileSummary {
                path: "old.txt".into(),
                ..Default::default()
            })
            .unwrap();
        store.begin(".");
        assert!(store.files().is_empty());
        assert!(store.inventory().is_empty());
    }
}
