use anyhow::Result;
use lexstat_config as cli;
use lexstat_config::OutputFormat;
use lexstat_content::{DEFAULT_EXTENSIONS, SUPPORTED_EXTENSIONS};
use serde::Serialize;

use crate::config::resolve_format;
use crate::format;

#[derive(Serialize)]
struct ExtensionsReport<'a> {
    supported: &'a [&'a str],
    default: &'a [&'a str],
}

pub(crate) fn handle(global: &cli::GlobalArgs, profile: Option<&cli::Profile>) -> Result<()> {
    match resolve_format(global, profile) {
        OutputFormat::Md => print!(
            "{}",
            format::render_extensions_md(SUPPORTED_EXTENSIONS, DEFAULT_EXTENSIONS)
        ),
        OutputFormat::Json => format::print_json(&ExtensionsReport {
            supported: SUPPORTED_EXTENSIONS,
            default: DEFAULT_EXTENSIONS,
        })?,
    }
    Ok(())
}
