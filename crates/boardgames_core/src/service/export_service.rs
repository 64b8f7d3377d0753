//! Creator and seller export use-cases.
//!
//! # Responsibility
//! - Filter, sort and shape stored entities into export DTOs.
//! - Serialize creators to XML and sellers to indented JSON.
//!
//! # Invariants
//! - Creators without boardgames are never exported.
//! - Seller exports hold at most `TOP_SELLERS` entries.
//! - Text ordering is ordinal; rating ordering uses `f64::total_cmp`.

use crate::dto::export::{
    ExportCreatorBoardgameDto, ExportCreatorDto, ExportSellerBoardgameDto, ExportSellerDto,
};
use crate::model::boardgame::Boardgame;
use crate::model::creator::Creator;
use crate::model::seller::SellerWithBoardgames;
use crate::repo::{CreatorRepository, RepoError, SellerRepository};
use crate::xml::{self, XmlError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Maximum number of sellers in the sellers export.
pub const TOP_SELLERS: usize = 5;

/// Failure that aborts an export call.
#[derive(Debug)]
pub enum ExportError {
    Xml(XmlError),
    Json(serde_json::Error),
    Repo(RepoError),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xml(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "failed to write sellers JSON: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Xml(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<XmlError> for ExportError {
    fn from(value: XmlError) -> Self {
        Self::Xml(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<RepoError> for ExportError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Boardgame filter for the sellers export.
///
/// Qualifying boardgames satisfy `year_published >= min_year` and
/// `rating <= max_rating`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SellerExportFilter {
    pub min_year: i32,
    pub max_rating: f64,
}

impl SellerExportFilter {
    pub fn matches(&self, game: &Boardgame) -> bool {
        game.year_published >= self.min_year && game.rating <= self.max_rating
    }
}

/// Export use-case service; read-only over the store.
pub struct ExportService<S> {
    store: S,
}

impl<S: CreatorRepository + SellerRepository> ExportService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Exports every creator that owns boardgames as a `<Creators>` document.
    pub fn export_creators_with_their_boardgames(&self) -> Result<String, ExportError> {
        let started_at = Instant::now();
        let creators = self.store.list_creators().inspect_err(|err| {
            error!("event=export_creators module=export status=error error_code=store_failed error={err}");
        })?;
        let projected = project_creators(creators);
        let document = xml::write_creators(&projected)?;

        info!(
            "event=export_creators module=export status=ok creators={} duration_ms={}",
            projected.len(),
            started_at.elapsed().as_millis()
        );
        Ok(document)
    }

    /// Exports the top sellers by count of boardgames matching `filter`.
    pub fn export_sellers_with_most_boardgames(
        &self,
        filter: SellerExportFilter,
    ) -> Result<String, ExportError> {
        let started_at = Instant::now();
        let sellers = self.store.list_sellers_with_boardgames().inspect_err(|err| {
            error!("event=export_sellers module=export status=error error_code=store_failed error={err}");
        })?;
        let projected = project_sellers(sellers, filter);
        let document = serde_json::to_string_pretty(&projected)?;

        info!(
            "event=export_sellers module=export status=ok sellers={} min_year={} max_rating={} duration_ms={}",
            projected.len(),
            filter.min_year,
            filter.max_rating,
            started_at.elapsed().as_millis()
        );
        Ok(document)
    }
}

/// Shapes creators for the XML export.
///
/// Drops creators without boardgames, sorts each creator's boardgames by
/// name, then sorts creators by boardgame count desc and full name asc.
pub fn project_creators(creators: Vec<Creator>) -> Vec<ExportCreatorDto> {
    let mut projected: Vec<ExportCreatorDto> = creators
        .into_iter()
        .filter(|creator| !creator.boardgames.is_empty())
        .map(|creator| {
            let creator_name = creator.full_name();
            let mut boardgames: Vec<ExportCreatorBoardgameDto> = creator
                .boardgames
                .into_iter()
                .map(|game| ExportCreatorBoardgameDto {
                    name: game.name,
                    year_published: game.year_published,
                })
                .collect();
            boardgames.sort_by(|a, b| a.name.cmp(&b.name));

            ExportCreatorDto {
                boardgames_count: boardgames.len(),
                creator_name,
                boardgames,
            }
        })
        .collect();

    projected.sort_by(|a, b| {
        b.boardgames_count
            .cmp(&a.boardgames_count)
            .then_with(|| a.creator_name.cmp(&b.creator_name))
    });
    projected
}

/// Shapes sellers for the JSON export.
///
/// Keeps only boardgames matching `filter`, drops sellers left with none,
/// sorts boardgames by rating desc then name asc, sorts sellers by match
/// count desc then name asc, and keeps the first `TOP_SELLERS`.
pub fn project_sellers(
    sellers: Vec<SellerWithBoardgames>,
    filter: SellerExportFilter,
) -> Vec<ExportSellerDto> {
    let mut projected: Vec<ExportSellerDto> = sellers
        .into_iter()
        .filter_map(|entry| {
            let mut boardgames: Vec<ExportSellerBoardgameDto> = entry
                .boardgames
                .into_iter()
                .filter(|game| filter.matches(game))
                .map(|game| ExportSellerBoardgameDto {
                    category: game.category_type.to_string(),
                    name: game.name,
                    rating: game.rating,
                    mechanics: game.mechanics,
                })
                .collect();
            if boardgames.is_empty() {
                return None;
            }
            boardgames.sort_by(|a, b| {
                b.rating
                    .total_cmp(&a.rating)
                    .then_with(|| a.name.cmp(&b.name))
            });

            Some(ExportSellerDto {
                name: entry.seller.name,
                website: entry.seller.website,
                boardgames,
            })
        })
        .collect();

    projected.sort_by(|a, b| {
        b.boardgames
            .len()
            .cmp(&a.boardgames.len())
            .then_with(|| a.name.cmp(&b.name))
    });
    projected.truncate(TOP_SELLERS);
    projected
}
