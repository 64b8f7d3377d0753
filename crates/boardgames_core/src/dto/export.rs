//! Export DTOs for the creators XML and sellers JSON projections.

use serde::Serialize;

/// `<Creator BoardgamesCount="..">` element of the creators export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCreatorDto {
    pub boardgames_count: usize,
    pub creator_name: String,
    /// Sorted ascending by name.
    pub boardgames: Vec<ExportCreatorBoardgameDto>,
}

/// `<Boardgame>` element nested in a creator export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCreatorBoardgameDto {
    pub name: String,
    pub year_published: i32,
}

/// One entry of the sellers JSON export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportSellerDto {
    pub name: String,
    pub website: String,
    /// Sorted by rating descending, then name ascending.
    pub boardgames: Vec<ExportSellerBoardgameDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportSellerBoardgameDto {
    pub name: String,
    pub rating: f64,
    pub mechanics: String,
    /// Category variant name, e.g. `"Strategy"`.
    pub category: String,
}
