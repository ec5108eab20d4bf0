use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lexstat_types::{DirectorySummary, FileSummary, PathInventory, SCHEMA_VERSION};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{StoreDocument, StoreError, SummaryStore};

/// A store persisted as one JSON document.
///
/// Upserts are buffered; [`SummaryStore::flush`] writes the document to a
/// temporary file next to the target and renames it into place.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    doc: StoreDocument,
    dirty: bool,
}

impl JsonStore {
    /// Open `path`, or start empty when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = if path.exists() {
            let bytes = fs::read(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
            let doc: StoreDocument =
                serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                    path: path.clone(),
                    source,
                })?;
            if doc.schema_version != SCHEMA_VERSION {
                return Err(StoreError::SchemaVersion {
                    path,
                    found: doc.schema_version,
                    expected: SCHEMA_VERSION,
                });
            }
            debug!(
                path = %path.display(),
                files = doc.files.len(),
                directories = doc.directories.len(),
                "loaded store"
            );
            doc
        } else {
            StoreDocument::default()
        };

        Ok(Self {
            path,
            doc,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &StoreDocument {
        &self.doc
    }

    fn write_document(&self) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(write_err)?;

        let temp = NamedTempFile::new_in(parent).map_err(write_err)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, &self.doc)?;
            writer.write_all(b"\n").map_err(write_err)?;
            writer.flush().map_err(write_err)?;
        }
        temp.persist(&self.path).map_err(|err| write_err(err.error))?;
        Ok(())
    }
}

impl SummaryStore for JsonStore {
    fn begin(&mut self, root: &str) {
        self.doc.reset(root);
        self.dirty = true;
    }

    fn root_path(&self) -> Option<&str> {
        self.doc.root.as_deref()
    }

    fn upsert_file(&mut self, summary: FileSummary) -> Result<(), StoreError> {
        self.doc.put_file(summary);
        self.dirty = true;
        Ok(())
    }

    fn upsert_directory(&mut self, summary: DirectorySummary) -> Result<(), StoreError> {
        self.doc.put_directory(summary);
        self.dirty = true;
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
        if !self.dirty {
            return Ok(());
        }
        self.write_document()?;
        self.dirty = false;
        debug!(path = %self.path.display(), "store written");
        Ok(())
    }
}
