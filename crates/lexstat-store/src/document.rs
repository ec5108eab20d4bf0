use std::collections::BTreeMap;

use lexstat_types::{DirectorySummary, FileSummary, PathInventory, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

use crate::{ROOT_SLUG, slug_for};

/// The serialized shape of a store: one record per normalized path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    pub schema_version: u32,
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub files: BTreeMap<String, FileSummary>,
    #[serde(default)]
    pub directories: BTreeMap<String, DirectorySummary>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            root: None,
            files: BTreeMap::new(),
            directories: BTreeMap::new(),
        }
    }
}

impl StoreDocument {
    pub(crate) fn reset(&mut self, root: &str) {
        self.root = Some(root.to_string());
        self.files.clear();
        self.directories.clear();
    }

    pub(crate) fn put_file(&mut self, summary: FileSummary) {
        self.files.insert(summary.path.clone(), summary);
    }

    pub(crate) fn put_directory(&mut self, summary: DirectorySummary) {
        self.directories.insert(summary.path.clone(), summary);
    }

    pub(crate) fn file(&self, key: &str) -> Option<&FileSummary> {
        self.files.get(key).or_else(|| {
            self.files
                .values()
                .find(|f| slug_for(&f.path, self.root.as_deref()) == key)
        })
    }

    /// `root` always resolves to the walk root, even when a directory is
    /// literally named `root`.
    pub(crate) fn directory(&self, key: &str) -> Option<&DirectorySummary> {
        if key == ROOT_SLUG
            && let Some(root) = &self.root
        {
            return self.directories.get(root);
        }
        self.directories.get(key).or_else(|| {
            self.directories
                .values()
                .find(|d| slug_for(&d.path, self.root.as_deref()) == key)
        })
    }

    pub(crate) fn inventory(&self) -> PathInventory {
        PathInventory {
            files: self.files.keys().cloned().collect(),
            dirs: self.directories.keys().cloned().collect(),
        }
    }
}
