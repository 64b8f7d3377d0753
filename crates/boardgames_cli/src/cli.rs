use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boardgames")]
#[command(about = "Import and export boardgames, creators and sellers", long_about = None)]
#[command(version = boardgames_core::core_version())]
pub struct Cli {
    /// SQLite database file, created and migrated on first use
    #[arg(long, value_name = "PATH", env = "BOARDGAMES_DB", default_value = "boardgames.sqlite3")]
    pub db: PathBuf,

    /// trace|debug|info|warn|error (defaults to debug in debug builds, info otherwise)
    #[arg(long, value_name = "LEVEL", env = "BOARDGAMES_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr when unset
    #[arg(long, value_name = "DIR", env = "BOARDGAMES_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a payload and print the per-record report
    Import(ImportCommand),
    /// Export a projection of stored data
    Export(ExportCommand),
    /// Delete all imported data
    Reset,
}

#[derive(Args)]
pub struct ImportCommand {
    #[command(subcommand)]
    pub kind: ImportKind,
}

#[derive(Subcommand)]
pub enum ImportKind {
    /// Creators with their boardgames, from a `<Creators>` XML file
    Creators {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Sellers linked to existing boardgames, from a JSON array file
    Sellers {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct ExportCommand {
    #[command(subcommand)]
    pub kind: ExportKind,

    /// Write the document to FILE instead of stdout
    #[arg(long, short, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ExportKind {
    /// Creators owning at least one boardgame, as XML
    Creators,
    /// Top sellers by boardgames published in or after YEAR and rated at most RATING, as JSON
    Sellers {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        rating: f64,
    },
}
