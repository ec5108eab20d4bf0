use anyhow::Result;
use lexstat_config as cli;
use lexstat_config::{ListKind, OutputFormat};
use lexstat_store::SummaryStore;

use crate::commands::show::open_store;
use crate::config::resolve_format;
use crate::format;

pub(crate) fn handle(
    args: cli::ListArgs,
    global: &cli::GlobalArgs,
    profile: Option<&cli::Profile>,
) -> Result<()> {
    let store = open_store(global, profile)?;
    let fmt = resolve_format(global, profile);

    match (args.kind, fmt) {
        (ListKind::Files, OutputFormat::Md) => print!("{}", format::render_files_md(&store.files())),
        (ListKind::Files, OutputFormat::Json) => format::print_json(&store.files())?,
        (ListKind::Dirs, OutputFormat::Md) => {
            print!("{}", format::render_dirs_md(&store.directories()))
        }
        (ListKind::Dirs, OutputFormat::Json) => format::print_json(&store.directories())?,
    }
    Ok(())
}
