//! Creator persistence with owned boardgames.

use crate::model::creator::{Creator, CreatorId};
use crate::repo::boardgame_repo::{read_boardgame_columns, BOARDGAME_COLUMNS};
use crate::repo::{RepoResult, SqliteStore};
use rusqlite::params;
use std::collections::HashMap;

pub trait CreatorRepository {
    /// Inserts creators and their boardgames in one transaction.
    ///
    /// Assigns store ids to every creator and boardgame on success.
    fn add_creators(&mut self, creators: &mut [Creator]) -> RepoResult<()>;
    /// Lists every creator with its boardgames, both in insertion order.
    fn list_creators(&self) -> RepoResult<Vec<Creator>>;
}

impl CreatorRepository for SqliteStore<'_> {
    fn add_creators(&mut self, creators: &mut [Creator]) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        {
            let mut insert_creator =
                tx.prepare("INSERT INTO creators (first_name, last_name) VALUES (?1, ?2);")?;
            let mut insert_boardgame = tx.prepare(
                "INSERT INTO boardgames (
                    name,
                    rating,
                    year_published,
                    category_type,
                    mechanics,
                    creator_id
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            )?;

            for creator in creators.iter_mut() {
                insert_creator.execute(params![creator.first_name, creator.last_name])?;
                let creator_id = tx.last_insert_rowid();
                creator.id = Some(creator_id);

                for game in creator.boardgames.iter_mut() {
                    insert_boardgame.execute(params![
                        game.name,
                        game.rating,
                        game.year_published,
                        game.category_type.code(),
                        game.mechanics,
                        creator_id,
                    ])?;
                    game.id = Some(tx.last_insert_rowid());
                }
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn list_creators(&self) -> RepoResult<Vec<Creator>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, first_name, last_name FROM creators ORDER BY id;")?;
        let mut creators = stmt
            .query_map([], |row| {
                Ok(Creator {
                    id: Some(row.get(0)?),
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    boardgames: Vec::new(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let by_id: HashMap<CreatorId, usize> = creators
            .iter()
            .enumerate()
            .filter_map(|(index, creator)| creator.id.map(|id| (id, index)))
            .collect();

        let mut stmt = self.conn.prepare(&format!(
            "SELECT b.creator_id, {BOARDGAME_COLUMNS}
             FROM boardgames b
             ORDER BY b.creator_id, b.id;"
        ))?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let creator_id: CreatorId = row.get(0)?;
            let game = read_boardgame_columns(row, 1)?;
            if let Some(&index) = by_id.get(&creator_id) {
                creators[index].boardgames.push(game);
            }
        }

        Ok(creators)
    }
}
