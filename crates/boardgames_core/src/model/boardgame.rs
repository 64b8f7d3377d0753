//! Boardgame entity and its category enumeration.

use std::fmt::{Display, Formatter};

/// Store-assigned boardgame identifier.
pub type BoardgameId = i64;

/// Fixed set of boardgame categories.
///
/// Discriminants match the integer codes used by import payloads and the
/// `boardgames.category_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryType {
    Abstract = 0,
    Bluffing = 1,
    DungeonCrawler = 2,
    Party = 3,
    Strategy = 4,
}

impl CategoryType {
    /// Maps an integer code to a category, `None` when out of range.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Abstract),
            1 => Some(Self::Bluffing),
            2 => Some(Self::DungeonCrawler),
            3 => Some(Self::Party),
            4 => Some(Self::Strategy),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    /// Variant name as written in exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abstract => "Abstract",
            Self::Bluffing => "Bluffing",
            Self::DungeonCrawler => "DungeonCrawler",
            Self::Party => "Party",
            Self::Strategy => "Strategy",
        }
    }
}

impl Display for CategoryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A boardgame owned by exactly one creator.
#[derive(Debug, Clone, PartialEq)]
pub struct Boardgame {
    pub id: Option<BoardgameId>,
    pub name: String,
    /// 1.00 to 10.00 inclusive.
    pub rating: f64,
    /// 2018 to 2023 inclusive.
    pub year_published: i32,
    pub category_type: CategoryType,
    pub mechanics: String,
}

#[cfg(test)]
mod tests {
    use super::CategoryType;

    #[test]
    fn category_codes_map_both_ways() {
        for code in 0..=4 {
            let category = CategoryType::from_code(code).expect("code should be in range");
            assert_eq!(category.code(), code);
        }
        assert_eq!(CategoryType::from_code(5), None);
        assert_eq!(CategoryType::from_code(-1), None);
    }

    #[test]
    fn category_text_is_variant_name() {
        assert_eq!(CategoryType::DungeonCrawler.to_string(), "DungeonCrawler");
        assert_eq!(CategoryType::Party.as_str(), "Party");
    }
}
