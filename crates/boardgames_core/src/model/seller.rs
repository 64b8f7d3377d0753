//! Seller entity and the seller/boardgame link.

use crate::model::boardgame::{Boardgame, BoardgameId};

/// Store-assigned seller identifier.
pub type SellerId = i64;

/// Link row between a seller and a boardgame.
///
/// Identity is the `(boardgame_id, seller_id)` pair. `seller_id` stays
/// `None` while the owning seller is unsaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardgameSeller {
    pub boardgame_id: BoardgameId,
    pub seller_id: Option<SellerId>,
}

/// A shop that lists boardgames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    pub id: Option<SellerId>,
    pub name: String,
    pub address: String,
    pub country: String,
    pub website: String,
    pub boardgames_sellers: Vec<BoardgameSeller>,
}

impl Seller {
    /// Links this seller to a boardgame unless the link already exists.
    ///
    /// Returns `false` for a duplicate link.
    pub fn link_boardgame(&mut self, boardgame_id: BoardgameId) -> bool {
        if self
            .boardgames_sellers
            .iter()
            .any(|link| link.boardgame_id == boardgame_id)
        {
            return false;
        }
        self.boardgames_sellers.push(BoardgameSeller {
            boardgame_id,
            seller_id: self.id,
        });
        true
    }
}

/// Read model for exports: a seller joined with its linked boardgames.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerWithBoardgames {
    pub seller: Seller,
    pub boardgames: Vec<Boardgame>,
}
