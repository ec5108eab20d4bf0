//! # lexstat-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and configuration file structures.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations (config files are read by the binary)
//! * Higher-tier crate dependencies

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// `lexstat` computes letter, syllable and word-frequency statistics for a
/// directory tree and aggregates them from files up to the root.
#[derive(Parser, Debug)]
#[command(name = "lexstat", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,

    /// Configuration profile to use from `<config_dir>/lexstat/config.json`.
    #[arg(long, global = true)]
    pub profile: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Summary store (JSON). Defaults to `.lexstat/store.json`.
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Verbose output (repeat for more detail). `LEXSTAT_LOG` overrides it.
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze a directory tree and persist per-file and per-directory summaries.
    Scan(ScanArgs),

    /// Letter, vowel, consonant and syllable breakdown of a single word.
    Word(WordArgs),

    /// List the file extensions lexstat can be asked to scan.
    Extensions,

    /// Show one stored summary.
    Show(ShowArgs),

    /// List stored files or directories.
    List(ListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Directory to analyze.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Extensions to include (repeatable or comma-separated), e.g. `--ext txt,py`.
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Skip dotfiles and dot-directories.
    #[arg(long)]
    pub no_hidden: bool,

    /// Respect `.gitignore` / `.ignore` files.
    #[arg(long)]
    pub respect_ignore: bool,

    /// Follow symbolic links.
    #[arg(long)]
    pub follow_links: bool,

    /// Read at most this many bytes of each file.
    #[arg(long, value_name = "BYTES")]
    pub max_file_bytes: Option<usize>,

    /// Recompute even if the set of files and directories is unchanged.
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug, Clone)]
pub struct WordArgs {
    /// The word to analyze (letters, spaces and hyphens).
    #[arg(value_name = "WORD")]
    pub word: String,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(subcommand)]
    pub target: ShowTarget,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ShowTarget {
    /// A file summary, by path or slug.
    File {
        #[arg(value_name = "PATH_OR_SLUG")]
        key: String,
    },
    /// A directory summary, by path or slug (`root` for the scanned root).
    Dir {
        #[arg(value_name = "PATH_OR_SLUG", default_value = "root")]
        key: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub kind: ListKind,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Files,
    Dirs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown tables.
    #[default]
    Md,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl UserConfig {
    /// The named profile, falling back to `default`.
    pub fn profile(&self, name: Option<&str>) -> Option<&Profile> {
        self.profiles.get(name.unwrap_or("default"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    pub format: Option<OutputFormat>,
    pub store: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub include_hidden: Option<bool>,
    pub respect_ignore: Option<bool>,
    pub follow_links: Option<bool>,
    pub max_file_bytes: Option<usize>,
}
