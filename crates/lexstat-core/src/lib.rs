//! # lexstat-core
//!
//! **Tier 4 (Engine and Facade)**
//!
//! This crate is the **primary library interface** for `lexstat`. It walks a
//! directory tree bottom-up, builds one summary per file and per directory,
//! and persists them through a [`SummaryStore`](lexstat_store::SummaryStore).
//!
//! ## Example
//!
//! ```rust,no_run
//! use lexstat_core::{ScanSettings, scan_workflow};
//! use lexstat_store::MemoryStore;
//! use lexstat_syllable::Syllabifier;
//!
//! let hyphenator = Syllabifier::embedded().expect("dictionaries");
//! let mut store = MemoryStore::new();
//! let receipt = scan_workflow(&ScanSettings::for_root("corpus"), &mut store, &hyphenator)
//!     .expect("scan failed");
//! println!("{} files", receipt.files);
//! ```
//!
//! ## What belongs here
//! * `FilesAggregator`, `DirectoryAggregator` and the `TreeWalk` orchestrator
//! * The scan workflow, including the unchanged-inventory shortcut
//!
//! ## What does NOT belong here
//! * Clap parsing (use lexstat-config)
//! * Output rendering (use the lexstat binary)

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod orchestrator;
pub mod settings;

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use lexstat_content::PlainTextExtractor;
use lexstat_store::SummaryStore;
use lexstat_syllable::Hyphenate;
use lexstat_types::{RunReceipt, RunStatus, SCHEMA_VERSION, ToolInfo, WordReport};
use lexstat_walk::{inventory_fingerprint, normalize_path, path_inventory, walk_bottom_up};
use tracing::info;

pub use aggregate::{AggregateError, DirectoryAggregator, FilesAggregator, FinishedDirectory, Phase};
pub use orchestrator::TreeWalk;
pub use settings::ScanSettings;

// Re-export types for convenience
pub use lexstat_tokenize::WordRejection;
pub use lexstat_types as types;

/// Runs the complete scan workflow: Walk -> Change check -> Aggregate -> Receipt.
///
/// When the store already holds exactly the paths a fresh walk finds under
/// the same root and `settings.force` is off, nothing is recomputed and the
/// stored root summary is returned.
pub fn scan_workflow(
    settings: &ScanSettings,
    store: &mut dyn SummaryStore,
    hyphenator: &dyn Hyphenate,
) -> Result<RunReceipt> {
    let root = Path::new(&settings.root);
    let filter = settings.filter();

    // 1. Walk
    let steps = walk_bottom_up(root, &filter, settings.walk_options())?;
    let inventory = path_inventory(&steps);
    let fingerprint = inventory_fingerprint(&inventory);
    let root_key = normalize_path(root);

    // 2. Change check
    let unchanged = !settings.force
        && store.root_path() == Some(root_key.as_str())
        && store.inventory() == inventory;

    let (status, summary) = if unchanged {
        info!("Nothing has changed in the structure");
        (RunStatus::Unchanged, store.root().cloned())
    } else {
        // 3. Aggregate
        info!(
            root = %root_key,
            files = inventory.files.len(),
            directories = inventory.dirs.len(),
            "analyzing tree"
        );
        store.begin(&root_key);
        let extractor = PlainTextExtractor::with_max_bytes(settings.max_file_bytes);
        let finished = TreeWalk::new(&extractor, hyphenator, &mut *store)
            .run(root, steps)
            .with_context(|| format!("Failed to analyze {}", root.display()))?;
        store.flush().context("Failed to persist summaries")?;
        (RunStatus::Computed, Some(finished.summary))
    };

    // 4. Receipt
    Ok(RunReceipt {
        schema_version: SCHEMA_VERSION,
        generated_at_ms: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis(),
        tool: ToolInfo::current(),
        status,
        root: root_key,
        extensions: filter.extensions(),
        files: inventory.files.len(),
        directories: inventory.dirs.len(),
        fingerprint,
        summary,
    })
}

/// Analyze one standalone word.
pub fn word_report(word: &str, hyphenator: &dyn Hyphenate) -> Result<WordReport, WordRejection> {
    lexstat_tokenize::analyze_word(word, hyphenator)
}
