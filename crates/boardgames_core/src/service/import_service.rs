//! Creator and seller import use-cases.
//!
//! # Responsibility
//! - Parse payloads, validate each record, map valid ones to entities.
//! - Persist all accepted entities of one call in a single batch.
//! - Produce the human-readable per-record report.
//!
//! # Invariants
//! - An invalid creator or seller is skipped entirely.
//! - An invalid boardgame only drops that boardgame; its creator is kept.
//! - Seller links only target boardgame ids present before the call began.
//! - Nothing is written when the payload itself cannot be parsed.

use crate::dto::import::{ImportBoardgameDto, ImportCreatorDto, ImportSellerDto};
use crate::model::boardgame::{Boardgame, CategoryType};
use crate::model::creator::Creator;
use crate::model::seller::Seller;
use crate::repo::{RepoError, Store};
use crate::validation::{Validate, Violation};
use crate::xml::{self, XmlError};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Report line for any record that fails validation or references nothing.
pub const ERROR_MESSAGE: &str = "Invalid data!";

/// Failure that aborts a whole import call.
#[derive(Debug)]
pub enum ImportError {
    /// Creators payload is not a readable `<Creators>` document.
    Xml(XmlError),
    /// Sellers payload is not a JSON array of seller objects.
    Json(serde_json::Error),
    Repo(RepoError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xml(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "invalid sellers JSON: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Xml(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<XmlError> for ImportError {
    fn from(value: XmlError) -> Self {
        Self::Xml(value)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<RepoError> for ImportError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Import use-case service over any store implementation.
pub struct ImportService<S: Store> {
    store: S,
}

impl<S: Store> ImportService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Imports creators and their boardgames from a `<Creators>` document.
    ///
    /// Returns the report, one line per rejected record plus one success
    /// line per accepted creator.
    pub fn import_creators(&mut self, xml_payload: &str) -> Result<String, ImportError> {
        let started_at = Instant::now();
        let dtos = xml::read_creators(xml_payload).inspect_err(|err| {
            error!("event=import_creators module=import status=error error_code=payload_invalid error={err}");
        })?;

        let mut report = Report::default();
        let mut creators = Vec::new();
        let mut rejected_boardgames = 0usize;

        for (index, dto) in dtos.into_iter().enumerate() {
            let (mut creator, boardgame_dtos) = match creator_from_dto(dto) {
                Ok(parts) => parts,
                Err(violations) => {
                    log_rejected("creator", index, &violations);
                    report.invalid();
                    continue;
                }
            };

            for (game_index, game_dto) in boardgame_dtos.into_iter().enumerate() {
                match boardgame_from_dto(game_dto) {
                    Ok(game) => creator.boardgames.push(game),
                    Err(violations) => {
                        log_rejected("boardgame", game_index, &violations);
                        rejected_boardgames += 1;
                        report.invalid();
                    }
                }
            }

            report.line(format!(
                "Successfully imported creator – {} {} with {} boardgames.",
                creator.first_name,
                creator.last_name,
                creator.boardgames.len()
            ));
            creators.push(creator);
        }

        self.store.add_creators(&mut creators).inspect_err(|err| {
            error!("event=import_creators module=import status=error error_code=store_failed error={err}");
        })?;

        info!(
            "event=import_creators module=import status=ok creators={} rejected_creators={} rejected_boardgames={} duration_ms={}",
            creators.len(),
            report.invalid_count - rejected_boardgames,
            rejected_boardgames,
            started_at.elapsed().as_millis()
        );
        Ok(report.finish())
    }

    /// Imports sellers from a JSON array and links them to existing
    /// boardgames.
    ///
    /// Boardgame ids are checked against a snapshot taken once, before any
    /// seller of this call is processed.
    pub fn import_sellers(&mut self, json_payload: &str) -> Result<String, ImportError> {
        let started_at = Instant::now();
        let dtos: Vec<ImportSellerDto> = serde_json::from_str(json_payload).inspect_err(|err| {
            error!("event=import_sellers module=import status=error error_code=payload_invalid error={err}");
        })?;
        let existing_ids = self.store.boardgame_ids()?;

        let mut report = Report::default();
        let mut sellers = Vec::new();
        let mut missing_links = 0usize;

        for (index, dto) in dtos.into_iter().enumerate() {
            let mut seller = match seller_from_dto(&dto) {
                Ok(seller) => seller,
                Err(violations) => {
                    log_rejected("seller", index, &violations);
                    report.invalid();
                    continue;
                }
            };

            for boardgame_id in dto.unique_boardgame_ids() {
                if !existing_ids.contains(&boardgame_id) {
                    debug!(
                        "event=import_record module=import status=rejected kind=seller_link index={index} boardgame_id={boardgame_id}"
                    );
                    missing_links += 1;
                    report.invalid();
                    continue;
                }
                seller.link_boardgame(boardgame_id);
            }

            report.line(format!(
                "Successfully imported seller - {} with {} boardgames.",
                seller.name,
                seller.boardgames_sellers.len()
            ));
            sellers.push(seller);
        }

        self.store.add_sellers(&mut sellers).inspect_err(|err| {
            error!("event=import_sellers module=import status=error error_code=store_failed error={err}");
        })?;

        info!(
            "event=import_sellers module=import status=ok sellers={} rejected_sellers={} missing_links={} duration_ms={}",
            sellers.len(),
            report.invalid_count - missing_links,
            missing_links,
            started_at.elapsed().as_millis()
        );
        Ok(report.finish())
    }
}

/// Line-oriented import report.
#[derive(Debug, Default)]
struct Report {
    text: String,
    invalid_count: usize,
}

impl Report {
    fn line(&mut self, line: impl AsRef<str>) {
        self.text.push_str(line.as_ref());
        self.text.push('\n');
    }

    fn invalid(&mut self) {
        self.invalid_count += 1;
        self.line(ERROR_MESSAGE);
    }

    fn finish(self) -> String {
        self.text.trim_end().to_string()
    }
}

/// Builds the creator shell (no boardgames yet) and hands back the nested
/// boardgame DTOs for individual validation.
fn creator_from_dto(
    dto: ImportCreatorDto,
) -> Result<(Creator, Vec<ImportBoardgameDto>), Vec<Violation>> {
    let violations = dto.violations();
    if !violations.is_empty() {
        return Err(violations);
    }

    match (dto.first_name, dto.last_name) {
        (Some(first_name), Some(last_name)) => {
            Ok((Creator::new(first_name, last_name), dto.boardgames))
        }
        _ => Err(violations),
    }
}

fn boardgame_from_dto(dto: ImportBoardgameDto) -> Result<Boardgame, Vec<Violation>> {
    let violations = dto.violations();
    if !violations.is_empty() {
        return Err(violations);
    }

    match (
        dto.name,
        dto.rating,
        dto.year_published,
        dto.category_type.and_then(CategoryType::from_code),
        dto.mechanics,
    ) {
        (Some(name), Some(rating), Some(year_published), Some(category_type), Some(mechanics)) => {
            Ok(Boardgame {
                id: None,
                name,
                rating,
                year_published,
                category_type,
                mechanics,
            })
        }
        _ => Err(violations),
    }
}

fn seller_from_dto(dto: &ImportSellerDto) -> Result<Seller, Vec<Violation>> {
    let violations = dto.violations();
    if !violations.is_empty() {
        return Err(violations);
    }

    match (&dto.name, &dto.address, &dto.country, &dto.website) {
        (Some(name), Some(address), Some(country), Some(website)) => Ok(Seller {
            id: None,
            name: name.clone(),
            address: address.clone(),
            country: country.clone(),
            website: website.clone(),
            boardgames_sellers: Vec::new(),
        }),
        _ => Err(violations),
    }
}

fn log_rejected(kind: &str, index: usize, violations: &[Violation]) {
    let fields = violations
        .iter()
        .map(|violation| violation.field)
        .collect::<Vec<_>>()
        .join(",");
    debug!("event=import_record module=import status=rejected kind={kind} index={index} fields={fields}");
}
