//! # lexstat-walk
//!
//! **Tier 2 (Utilities)**
//!
//! Filesystem traversal for lexstat. Produces one [`WalkStep`] per directory,
//! deepest first, so a consumer always sees every subdirectory before its
//! parent.
//!
//! ## What belongs here
//! * Bottom-up directory traversal (optionally respecting ignore files)
//! * Extension filtering
//! * Path inventory and its fingerprint for change detection
//! * Path normalization
//!
//! ## What does NOT belong here
//! * Reading file contents (use lexstat-content)
//! * Statistics (use lexstat-model / lexstat-core)

#![forbid(unsafe_code)]

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;
use lexstat_types::PathInventory;
use tracing::{debug, warn};

/// One visited directory: its path, immediate subdirectories and immediate
/// qualifying files. All paths are joined onto the walk root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStep {
    pub path: PathBuf,
    pub subdirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl WalkStep {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

/// Case-insensitive set of file extensions, stored lowercase with a leading dot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Accepts `txt`, `.txt` and `.TXT` alike.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .filter_map(|ext| {
                let ext = ext.as_ref().trim().trim_start_matches('.').to_lowercase();
                (!ext.is_empty()).then(|| format!(".{ext}"))
            })
            .collect();
        Self { extensions }
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .contains(&format!(".{}", ext.to_lowercase()))
            })
    }

    /// The extensions in sorted order, each with a leading dot.
    pub fn extensions(&self) -> Vec<String> {
        self.extensions.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Visit dotfiles and dot-directories.
    pub include_hidden: bool,
    /// Honor `.gitignore`, `.ignore` and git exclude files.
    pub respect_ignore: bool,
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
            respect_ignore: false,
            follow_links: false,
        }
    }
}

/// Walk `root` and return one step per directory, deepest first.
///
/// Within a depth, steps are ordered by path; `subdirs` and `files` are
/// sorted. Files that do not match `filter` are not listed. Entries that
/// cannot be read are logged and skipped.
pub fn walk_bottom_up(
    root: &Path,
    filter: &ExtensionFilter,
    options: WalkOptions,
) -> Result<Vec<WalkStep>> {
    let meta = std::fs::metadata(root)
        .with_context(|| format!("Failed to stat {}", root.display()))?;
    if !meta.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let mut builder = WalkBuilder::new(root);
    builder.hidden(!options.include_hidden);
    builder.ignore(options.respect_ignore);
    builder.git_ignore(options.respect_ignore);
    builder.git_exclude(options.respect_ignore);
    builder.git_global(options.respect_ignore);
    builder.parents(options.respect_ignore);
    builder.require_git(false);
    builder.follow_links(options.follow_links);

    let mut steps: BTreeMap<PathBuf, WalkStep> = BTreeMap::new();
    steps.insert(root.to_path_buf(), WalkStep::new(root));

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping walk entry: {err}");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path().to_path_buf();
        let Some(parent) = path.parent().map(Path::to_path_buf) else {
            continue;
        };

        if file_type.is_dir() {
            steps
                .entry(parent)
                .or_insert_with_key(|p| WalkStep::new(p.clone()))
                .subdirs
                .push(path.clone());
            steps
                .entry(path.clone())
                .or_insert_with(|| WalkStep::new(path));
        } else if file_type.is_file() {
            if filter.matches(&path) {
                steps
                    .entry(parent)
                    .or_insert_with_key(|p| WalkStep::new(p.clone()))
                    .files
                    .push(path);
            } else {
                debug!(path = %path.display(), "extension not selected");
            }
        }
    }

    let mut steps: Vec<WalkStep> = steps
        .into_values()
        .map(|mut step| {
            step.subdirs.sort();
            step.files.sort();
            step
        })
        .collect();
    steps.sort_by(|a, b| {
        (Reverse(depth(&a.path)), &a.path).cmp(&(Reverse(depth(&b.path)), &b.path))
    });
    Ok(steps)
}

fn depth(path: &Path) -> usize {
    path.components().count()
}

/// The set of normalized file and directory paths covered by `steps`.
pub fn path_inventory(steps: &[WalkStep]) -> PathInventory {
    let mut inventory = PathInventory::default();
    for step in steps {
        inventory.dirs.insert(normalize_path(&step.path));
        inventory
            .files
            .extend(step.files.iter().map(|f| normalize_path(f)));
    }
    inventory
}

/// Stable hex digest of an inventory. Equal inventories give equal digests.
pub fn inventory_fingerprint(inventory: &PathInventory) -> String {
    let mut hasher = blake3::Hasher::new();
    for file in &inventory.files {
        hasher.update(b"f\0");
        hasher.update(file.as_bytes());
        hasher.update(b"\n");
    }
    for dir in &inventory.dirs {
        hasher.update(b"d\0");
        hasher.update(dir.as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize().to_hex().to_string()
}

/// Render a path with `/` separators, no leading `./` and no trailing `/`.
/// An empty or current-directory path becomes `.`.
pub fn normalize_path(path: &Path) -> String {
    let mut s = path.to_string_lossy().replace('\\', "/");

    while let Some(stripped) = s.strip_prefix("./") {
        s = stripped.to_string();
    }
    while s.len() > 1 && s.ends_with('/') {
        s.pop();
    }

    if s.is_empty() { ".".to_string() } else { s }
}
