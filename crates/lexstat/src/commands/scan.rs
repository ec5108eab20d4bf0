use anyhow::{Context, Result};
use lexstat_config as cli;
use lexstat_config::OutputFormat;
use lexstat_core::scan_workflow;
use lexstat_store::JsonStore;
use lexstat_syllable::Syllabifier;
use tracing::info;

use crate::config::{resolve_format, resolve_scan, resolve_store_path};
use crate::format;

pub(crate) fn handle(
    args: cli::ScanArgs,
    global: &cli::GlobalArgs,
    profile: Option<&cli::Profile>,
) -> Result<()> {
    let settings = resolve_scan(&args, profile);
    let store_path = resolve_store_path(global, profile);

    let hyphenator =
        Syllabifier::embedded().context("Failed to load hyphenation dictionaries")?;
    let mut store = JsonStore::open(&store_path)
        .with_context(|| format!("Failed to open store {}", store_path.display()))?;

    let receipt = scan_workflow(&settings, &mut store, &hyphenator)?;
    info!(
        status = ?receipt.status,
        files = receipt.files,
        directories = receipt.directories,
        store = %store_path.display(),
        "scan finished"
    );

    match resolve_format(global, profile) {
        OutputFormat::Md => print!("{}", format::render_receipt_md(&receipt)),
        OutputFormat::Json => format::print_json(&receipt)?,
    }
    Ok(())
}
