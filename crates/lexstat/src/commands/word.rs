use anyhow::{Context, Result};
use lexstat_config as cli;
use lexstat_config::OutputFormat;
use lexstat_core::word_report;
use lexstat_syllable::Syllabifier;

use crate::config::resolve_format;
use crate::format;

pub(crate) fn handle(
    args: cli::WordArgs,
    global: &cli::GlobalArgs,
    profile: Option<&cli::Profile>,
) -> Result<()> {
    let hyphenator =
        Syllabifier::embedded().context("Failed to load hyphenation dictionaries")?;
    let report = word_report(&args.word, &hyphenator)?;

    match resolve_format(global, profile) {
        OutputFormat::Md => print!("{}", format::render_word_md(&report)),
        OutputFormat::Json => format::print_json(&report)?,
    }
    Ok(())
}
