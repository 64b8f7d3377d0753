//! Boardgame queries.
//!
//! Boardgames are only ever written as part of a creator batch, so this
//! repository is read-only.

use crate::model::boardgame::{Boardgame, BoardgameId, CategoryType};
use crate::repo::{RepoError, RepoResult, SqliteStore};
use rusqlite::{OptionalExtension, Row};
use std::collections::HashSet;

pub(crate) const BOARDGAME_COLUMNS: &str =
    "b.id, b.name, b.rating, b.year_published, b.category_type, b.mechanics";

pub trait BoardgameRepository {
    /// Point-in-time set of every stored boardgame id.
    fn boardgame_ids(&self) -> RepoResult<HashSet<BoardgameId>>;
    /// Read-back of one stored boardgame; `None` when the id is unknown.
    /// Imports and exports do not use it.
    fn get_boardgame(&self, id: BoardgameId) -> RepoResult<Option<Boardgame>>;
}

impl BoardgameRepository for SqliteStore<'_> {
    fn boardgame_ids(&self) -> RepoResult<HashSet<BoardgameId>> {
        let mut stmt = self.conn.prepare("SELECT id FROM boardgames;")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, BoardgameId>(0))?
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(ids)
    }

    fn get_boardgame(&self, id: BoardgameId) -> RepoResult<Option<Boardgame>> {
        let sql = format!("SELECT {BOARDGAME_COLUMNS} FROM boardgames b WHERE b.id = ?1;");
        let row = self
            .conn
            .query_row(&sql, [id], |row| Ok(read_boardgame_columns(row, 0)))
            .optional()?;
        row.transpose()
    }
}

/// Decodes the six `BOARDGAME_COLUMNS` starting at `offset`.
pub(crate) fn read_boardgame_columns(row: &Row<'_>, offset: usize) -> RepoResult<Boardgame> {
    let code: i64 = row.get(offset + 4)?;
    let category_type = CategoryType::from_code(code).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid category code `{code}` in boardgames.category_type"
        ))
    })?;

    Ok(Boardgame {
        id: Some(row.get(offset)?),
        name: row.get(offset + 1)?,
        rating: row.get(offset + 2)?,
        year_published: row.get(offset + 3)?,
        category_type,
        mechanics: row.get(offset + 5)?,
    })
}
