//! Import DTOs for creators (XML) and sellers (JSON).

use crate::model::boardgame::BoardgameId;
use serde::Deserialize;

/// One `<Creator>` element of a creators payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportCreatorDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub boardgames: Vec<ImportBoardgameDto>,
}

/// One `<Boardgame>` element nested under a creator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportBoardgameDto {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub year_published: Option<i32>,
    /// Raw integer code, mapped to `CategoryType` after validation.
    pub category_type: Option<i64>,
    pub mechanics: Option<String>,
}

/// One object of a sellers JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportSellerDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    /// `null` and a missing key both mean "no boardgames".
    #[serde(rename = "Boardgames", default)]
    pub boardgame_ids: Option<Vec<BoardgameId>>,
}

impl ImportSellerDto {
    /// Submitted ids with duplicates dropped, first occurrence order kept.
    pub fn unique_boardgame_ids(&self) -> Vec<BoardgameId> {
        let mut seen = std::collections::HashSet::new();
        self.boardgame_ids
            .as_deref()
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ImportSellerDto;

    #[test]
    fn seller_dto_reads_pascal_case_keys() {
        let dto: ImportSellerDto = serde_json::from_str(
            r#"{"Name":"Board Bazaar","Address":"12 Main St","Country":"USA","Website":"www.boardbazaar.com","Boardgames":[1,1,2,999]}"#,
        )
        .unwrap();
        assert_eq!(dto.name.as_deref(), Some("Board Bazaar"));
        assert_eq!(dto.website.as_deref(), Some("www.boardbazaar.com"));
        assert_eq!(dto.unique_boardgame_ids(), vec![1, 2, 999]);
    }

    #[test]
    fn seller_dto_treats_missing_and_null_boardgames_as_empty() {
        let missing: ImportSellerDto = serde_json::from_str(r#"{"Name":"Shop"}"#).unwrap();
        let null: ImportSellerDto =
            serde_json::from_str(r#"{"Name":"Shop","Boardgames":null}"#).unwrap();
        assert!(missing.unique_boardgame_ids().is_empty());
        assert!(null.unique_boardgame_ids().is_empty());
        assert_eq!(missing.address, None);
    }
}
