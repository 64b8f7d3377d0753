//! Creator entity.

use crate::model::boardgame::Boardgame;

/// Store-assigned creator identifier.
pub type CreatorId = i64;

/// A boardgame designer together with the games they own.
#[derive(Debug, Clone, PartialEq)]
pub struct Creator {
    pub id: Option<CreatorId>,
    pub first_name: String,
    pub last_name: String,
    /// Insertion order is kept; exports re-sort by name.
    pub boardgames: Vec<Boardgame>,
}

impl Creator {
    /// Creates an unsaved creator with no boardgames yet.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            boardgames: Vec::new(),
        }
    }

    /// `first + " " + last`, the name used by reports and exports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
