//! Store contract and its SQLite implementation.
//!
//! # Responsibility
//! - Define the data access the importer and exporter rely on.
//! - Keep SQL details behind per-aggregate repository traits.
//!
//! # Invariants
//! - Every batch add runs in one transaction: all rows or none.
//! - Read paths reject rows that no longer decode into valid entities.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod boardgame_repo;
pub mod creator_repo;
pub mod seller_repo;
mod store;

pub use boardgame_repo::BoardgameRepository;
pub use creator_repo::CreatorRepository;
pub use seller_repo::SellerRepository;
pub use store::{SqliteStore, Store};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
