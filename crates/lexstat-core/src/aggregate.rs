//! File- and directory-level aggregation.

use std::collections::BTreeSet;
use std::fmt;
use std::mem;
use std::path::{Path, PathBuf};

use lexstat_content::TextExtractor;
use lexstat_model::ContentStats;
use lexstat_store::{StoreError, SummaryStore};
use lexstat_syllable::Hyphenate;
use lexstat_types::{DirectorySummary, FileSummary};
use lexstat_walk::normalize_path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("directory {parent} received a report from {child} while {phase}")]
    LateChild {
        parent: PathBuf,
        child: PathBuf,
        phase: Phase,
    },

    #[error("directory {parent} received two reports from {child}")]
    DuplicateChild { parent: PathBuf, child: PathBuf },

    #[error("directory {parent} was visited before its subdirectory {child}")]
    MissingChild { parent: PathBuf, child: PathBuf },

    #[error("directory {path} cannot {action} while {phase}")]
    OutOfOrder {
        path: PathBuf,
        action: &'static str,
        phase: Phase,
    },

    #[error("walk finished without reaching the root {root}")]
    RootNotReached { root: PathBuf },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Lifecycle of one directory's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Only child reports so far.
    Unvisited,
    OwnFilesFolded,
    ChildrenFolded,
    Finalized,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Unvisited => "unvisited",
            Phase::OwnFilesFolded => "own files folded",
            Phase::ChildrenFolded => "children folded",
            Phase::Finalized => "finalized",
        })
    }
}

/// A finalized directory: the persisted summary plus the full statistics
/// (frequency tables included) its parent folds in.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedDirectory {
    pub path: PathBuf,
    pub summary: DirectorySummary,
    pub stats: ContentStats,
}

/// Builds statistics for the files directly inside one directory.
pub struct FilesAggregator<'a> {
    extractor: &'a dyn TextExtractor,
    hyphenator: &'a dyn Hyphenate,
}

impl<'a> FilesAggregator<'a> {
    pub fn new(extractor: &'a dyn TextExtractor, hyphenator: &'a dyn Hyphenate) -> Self {
        Self {
            extractor,
            hyphenator,
        }
    }

    /// Statistics for one file. Unreadable content yields the zero-word value.
    pub fn file_stats(&self, path: &Path) -> ContentStats {
        let text = self.extractor.extract(path);
        ContentStats::from_text(&text, self.hyphenator)
    }

    /// Upsert one summary per file and fold them all into one accumulator.
    pub fn aggregate(
        &self,
        files: &[PathBuf],
        store: &mut dyn SummaryStore,
    ) -> Result<ContentStats, StoreError> {
        let mut own = ContentStats::new();
        for path in files {
            let stats = self.file_stats(path);
            let summary = FileSummary {
                path: normalize_path(path),
                content: stats.summarize(),
            };
            debug!(path = %summary.path, words = stats.word_count(), "file analyzed");
            store.upsert_file(summary)?;
            own.merge(&stats);
        }
        Ok(own)
    }
}

/// Pending slot for one directory.
///
/// Child reports may arrive while the slot is [`Phase::Unvisited`]. Visiting
/// the directory then folds its own files first, then every child, and
/// finally produces the [`FinishedDirectory`].
#[derive(Debug)]
pub struct DirectoryAggregator {
    path: PathBuf,
    phase: Phase,
    children: Vec<FinishedDirectory>,
    stats: ContentStats,
    file_count: usize,
    files: BTreeSet<String>,
    dirs: BTreeSet<String>,
}

impl DirectoryAggregator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            phase: Phase::Unvisited,
            children: Vec::new(),
            stats: ContentStats::new(),
            file_count: 0,
            files: BTreeSet::new(),
            dirs: BTreeSet::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), AggregateError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(AggregateError::OutOfOrder {
                path: self.path.clone(),
                action,
                phase: self.phase,
            })
        }
    }

    /// Park a finalized child until this directory is visited.
    pub fn report_child(&mut self, child: FinishedDirectory) -> Result<(), AggregateError> {
        if self.phase != Phase::Unvisited {
            return Err(AggregateError::LateChild {
                parent: self.path.clone(),
                child: child.path,
                phase: self.phase,
            });
        }
        if self.children.iter().any(|c| c.path == child.path) {
            return Err(AggregateError::DuplicateChild {
                parent: self.path.clone(),
                child: child.path,
            });
        }
        self.children.push(child);
        Ok(())
    }

    /// Fold the own-files accumulator and record the direct listing.
    pub fn fold_own_files(
        &mut self,
        own: &ContentStats,
        files: &[PathBuf],
        subdirs: &[PathBuf],
    ) -> Result<(), AggregateError> {
        self.expect_phase(Phase::Unvisited, "fold its own files")?;
        self.stats.merge(own);
        self.file_count += files.len();
        self.files.extend(files.iter().map(|f| normalize_path(f)));
        self.dirs.extend(subdirs.iter().map(|d| normalize_path(d)));
        self.phase = Phase::OwnFilesFolded;
        Ok(())
    }

    /// Fold every parked child. Each of `subdirs` must have reported.
    pub fn fold_children(&mut self, subdirs: &[PathBuf]) -> Result<(), AggregateError> {
        self.expect_phase(Phase::OwnFilesFolded, "fold its children")?;
        if let Some(missing) = subdirs
            .iter()
            .find(|sub| !self.children.iter().any(|c| &c.path == *sub))
        {
            return Err(AggregateError::MissingChild {
                parent: self.path.clone(),
                child: missing.clone(),
            });
        }

        for child in mem::take(&mut self.children) {
            self.stats.merge(&child.stats);
            self.file_count += child.summary.file_count;
            self.files.extend(child.summary.files);
            self.dirs.insert(child.summary.path);
            self.dirs.extend(child.summary.dirs);
        }
        self.phase = Phase::ChildrenFolded;
        Ok(())
    }

    /// Produce the directory's summary. The slot stays in
    /// [`Phase::Finalized`] and rejects any later report.
    pub fn finalize(&mut self) -> Result<FinishedDirectory, AggregateError> {
        self.expect_phase(Phase::ChildrenFolded, "finalize")?;
        self.phase = Phase::Finalized;

        let stats = mem::take(&mut self.stats);
        let summary = DirectorySummary {
            path: normalize_path(&self.path),
            file_count: self.file_count,
            files: mem::take(&mut self.files).into_iter().collect(),
            dirs: mem::take(&mut self.dirs).into_iter().collect(),
            content: stats.summarize(),
        };
        Ok(FinishedDirectory {
            path: self.path.clone(),
            summary,
            stats,
        })
    }
}
