use crate::repo::{BoardgameRepository, CreatorRepository, RepoResult, SellerRepository};
use rusqlite::Connection;

/// Everything the import/export services need from storage.
pub trait Store: BoardgameRepository + CreatorRepository + SellerRepository {}

impl<T> Store for T where T: BoardgameRepository + CreatorRepository + SellerRepository {}

/// SQLite-backed store over one migrated connection.
///
/// Holds the connection exclusively for as long as the store lives.
pub struct SqliteStore<'conn> {
    pub(crate) conn: &'conn mut Connection,
}

impl<'conn> SqliteStore<'conn> {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }

    /// Deletes every imported row, children first, and restarts id numbering.
    pub fn clear_all(&mut self) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(
            "DELETE FROM boardgames_sellers;
             DELETE FROM sellers;
             DELETE FROM boardgames;
             DELETE FROM creators;
             DELETE FROM sqlite_sequence;",
        )?;
        tx.commit()?;
        Ok(())
    }
}
