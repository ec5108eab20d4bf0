pub(crate) mod extensions;
pub(crate) mod list;
pub(crate) mod scan;
pub(crate) mod show;
pub(crate) mod word;

use anyhow::Result;
use lexstat_config as cli;

pub(crate) fn dispatch(cli: cli::Cli, profile: Option<&cli::Profile>) -> Result<()> {
    let global = &cli.global;
    match cli.command {
        cli::Commands::Scan(args) => scan::handle(args, global, profile),
        cli::Commands::Word(args) => word::handle(args, global, profile),
        cli::Commands::Extensions => extensions::handle(global, profile),
        cli::Commands::Show(args) => show::handle(args, global, profile),
        cli::Commands::List(args) => list::handle(args, global, profile),
    }
}
