//! Bottom-up tree walk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lexstat_content::TextExtractor;
use lexstat_store::SummaryStore;
use lexstat_syllable::Hyphenate;
use lexstat_walk::WalkStep;
use tracing::{debug, info};

use crate::aggregate::{AggregateError, DirectoryAggregator, FilesAggregator, FinishedDirectory};

/// Folds a deepest-first walk into one summary per directory.
///
/// Each finished directory is persisted and then parked in its parent's
/// pending slot. The root's [`FinishedDirectory`] is the run result.
pub struct TreeWalk<'a> {
    files: FilesAggregator<'a>,
    store: &'a mut dyn SummaryStore,
}

impl<'a> TreeWalk<'a> {
    pub fn new(
        extractor: &'a dyn TextExtractor,
        hyphenator: &'a dyn Hyphenate,
        store: &'a mut dyn SummaryStore,
    ) -> Self {
        Self {
            files: FilesAggregator::new(extractor, hyphenator),
            store,
        }
    }

    /// Visit every step in order. Fails if a directory comes before one of
    /// its subdirectories or the walk never reaches `root`.
    pub fn run<I>(&mut self, root: &Path, steps: I) -> Result<FinishedDirectory, AggregateError>
    where
        I: IntoIterator<Item = WalkStep>,
    {
        let mut pending: BTreeMap<PathBuf, DirectoryAggregator> = BTreeMap::new();
        let mut result = None;
        let mut visited = 0usize;

        for step in steps {
            let slot = pending
                .entry(step.path.clone())
                .or_insert_with(|| DirectoryAggregator::new(step.path.clone()));

            let own = self.files.aggregate(&step.files, &mut *self.store)?;
            slot.fold_own_files(&own, &step.files, &step.subdirs)?;
            slot.fold_children(&step.subdirs)?;
            let finished = slot.finalize()?;

            debug!(
                path = %finished.summary.path,
                files = finished.summary.file_count,
                words = finished.stats.word_count(),
                "directory finalized"
            );
            self.store.upsert_directory(finished.summary.clone())?;
            visited += 1;

            if step.path == root {
                result = Some(finished);
                continue;
            }
            if let Some(parent) = step.path.parent() {
                pending
                    .entry(parent.to_path_buf())
                    .or_insert_with(|| DirectoryAggregator::new(parent))
                    .report_child(finished)?;
            }
        }

        let root_dir = result.ok_or_else(|| AggregateError::RootNotReached {
            root: root.to_path_buf(),
        })?;
        info!(
            directories = visited,
            files = root_dir.summary.file_count,
            words = root_dir.stats.word_count(),
            "tree analyzed"
        );
        Ok(root_dir)
    }
}
