use std::path::Path;

use anyhow::{Context, Result, bail};
use lexstat_config as cli;
use lexstat_config::OutputFormat;
use lexstat_store::{JsonStore, SummaryStore};
use lexstat_walk::normalize_path;

use crate::config::{resolve_format, resolve_store_path};
use crate::format;

pub(crate) fn open_store(
    global: &cli::GlobalArgs,
    profile: Option<&cli::Profile>,
) -> Result<JsonStore> {
    let path = resolve_store_path(global, profile);
    JsonStore::open(&path).with_context(|| format!("Failed to open store {}", path.display()))
}

pub(crate) fn handle(
    args: cli::ShowArgs,
    global: &cli::GlobalArgs,
    profile: Option<&cli::Profile>,
) -> Result<()> {
    let store = open_store(global, profile)?;
    let fmt = resolve_format(global, profile);

    match args.target {
        cli::ShowTarget::File { key } => {
            let Some(summary) = lookup(&key, |k| store.file(k)) else {
                bail!("No stored summary for file '{key}'");
            };
            match fmt {
                OutputFormat::Md => print!("{}", format::render_file_md(summary)),
                OutputFormat::Json => format::print_json(summary)?,
            }
        }
        cli::ShowTarget::Dir { key } => {
            let Some(summary) = lookup(&key, |k| store.directory(k)) else {
                bail!("No stored summary for directory '{key}'");
            };
            match fmt {
                OutputFormat::Md => print!("{}", format::render_directory_md(summary)),
                OutputFormat::Json => format::print_json(summary)?,
            }
        }
    }
    Ok(())
}

/// Try the key as given, then as a normalized path.
fn lookup<'s, T>(key: &str, find: impl Fn(&str) -> Option<&'s T>) -> Option<&'s T> {
    find(key).or_else(|| find(&normalize_path(Path::new(key))))
}
