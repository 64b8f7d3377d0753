//! Seller persistence with cascaded boardgame links.

use crate::model::seller::{BoardgameSeller, Seller, SellerId, SellerWithBoardgames};
use crate::repo::boardgame_repo::{read_boardgame_columns, BOARDGAME_COLUMNS};
use crate::repo::{RepoResult, SqliteStore};
use rusqlite::params;
use std::collections::HashMap;

pub trait SellerRepository {
    /// Inserts sellers and their `boardgames_sellers` links in one
    /// transaction, assigning seller ids to sellers and links.
    fn add_sellers(&mut self, sellers: &mut [Seller]) -> RepoResult<()>;
    /// Lists every seller joined with the boardgames it links to.
    fn list_sellers_with_boardgames(&self) -> RepoResult<Vec<SellerWithBoardgames>>;
}

impl SellerRepository for SqliteStore<'_> {
    fn add_sellers(&mut self, sellers: &mut [Seller]) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        {
            let mut insert_seller = tx.prepare(
                "INSERT INTO sellers (name, address, country, website)
                 VALUES (?1, ?2, ?3, ?4);",
            )?;
            let mut insert_link = tx.prepare(
                "INSERT INTO boardgames_sellers (boardgame_id, seller_id) VALUES (?1, ?2);",
            )?;

            for seller in sellers.iter_mut() {
                insert_seller.execute(params![
                    seller.name,
                    seller.address,
                    seller.country,
                    seller.website,
                ])?;
                let seller_id = tx.last_insert_rowid();
                seller.id = Some(seller_id);

                for link in seller.boardgames_sellers.iter_mut() {
                    insert_link.execute(params![link.boardgame_id, seller_id])?;
                    link.seller_id = Some(seller_id);
                }
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn list_sellers_with_boardgames(&self) -> RepoResult<Vec<SellerWithBoardgames>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, address, country, website FROM sellers ORDER BY id;",
        )?;
        let mut sellers = stmt
            .query_map([], |row| {
                Ok(SellerWithBoardgames {
                    seller: Seller {
                        id: Some(row.get(0)?),
                        name: row.get(1)?,
                        address: row.get(2)?,
                        country: row.get(3)?,
                        website: row.get(4)?,
                        boardgames_sellers: Vec::new(),
                    },
                    boardgames: Vec::new(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let by_id: HashMap<SellerId, usize> = sellers
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.seller.id.map(|id| (id, index)))
            .collect();

        let mut stmt = self.conn.prepare(&format!(
            "SELECT bs.seller_id, {BOARDGAME_COLUMNS}
             FROM boardgames_sellers bs
             INNER JOIN boardgames b ON b.id = bs.boardgame_id
             ORDER BY bs.seller_id, b.id;"
        ))?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let seller_id: SellerId = row.get(0)?;
            let game = read_boardgame_columns(row, 1)?;
            let Some(&index) = by_id.get(&seller_id) else {
                continue;
            };
            let entry = &mut sellers[index];
            if let Some(boardgame_id) = game.id {
                entry.seller.boardgames_sellers.push(BoardgameSeller {
                    boardgame_id,
                    seller_id: Some(seller_id),
                });
            }
            entry.boardgames.push(game);
        }

        Ok(sellers)
    }
}
