//! Boardgames import/export core.
//!
//! Imports creators (XML) and sellers (JSON) into SQLite after field-level
//! validation, and exports filtered, sorted projections back to XML/JSON.

pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;
pub mod xml;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::boardgame::{Boardgame, BoardgameId, CategoryType};
pub use model::creator::{Creator, CreatorId};
pub use model::seller::{BoardgameSeller, Seller, SellerId, SellerWithBoardgames};
pub use repo::{
    BoardgameRepository, CreatorRepository, RepoError, RepoResult, SellerRepository, SqliteStore,
    Store,
};
pub use service::export_service::{ExportError, ExportService, SellerExportFilter};
pub use service::import_service::{ImportError, ImportService};
pub use validation::{Constraint, Validate, Violation};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn core_version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
