//! `boardgames` command-line host.
//!
//! # Responsibility
//! - Wire flags/env configuration into core logging, storage and services.
//! - Print import reports and export documents.

mod cli;

use anyhow::Context;
use boardgames_core::db::open_db;
use boardgames_core::{
    default_log_level, init_logging, ExportService, ImportService, SellerExportFilter,
    SqliteStore,
};
use clap::Parser;
use cli::{Cli, Commands, ExportKind, ImportKind};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, cli.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let mut conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let store = SqliteStore::new(&mut conn);

    match cli.command {
        Commands::Import(import) => {
            let mut service = ImportService::new(store);
            let report = match import.kind {
                ImportKind::Creators { file } => service.import_creators(&read_payload(&file)?)?,
                ImportKind::Sellers { file } => service.import_sellers(&read_payload(&file)?)?,
            };
            println!("{report}");
        }
        Commands::Export(export) => {
            let service = ExportService::new(store);
            let document = match export.kind {
                ExportKind::Creators => service.export_creators_with_their_boardgames()?,
                ExportKind::Sellers { year, rating } => {
                    service.export_sellers_with_most_boardgames(SellerExportFilter {
                        min_year: year,
                        max_rating: rating,
                    })?
                }
            };
            match export.output {
                Some(path) => std::fs::write(&path, document)
                    .with_context(|| format!("failed to write `{}`", path.display()))?,
                None => println!("{document}"),
            }
        }
        Commands::Reset => {
            let mut store = store;
            store.clear_all()?;
            log::info!("event=reset module=cli status=ok");
        }
    }

    Ok(())
}

/// Reads a payload file, dropping a leading UTF-8 byte order mark.
fn read_payload(path: &Path) -> anyhow::Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    Ok(content
        .strip_prefix('\u{feff}')
        .map(str::to_string)
        .unwrap_or(content))
}
