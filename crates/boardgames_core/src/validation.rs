//! Field-level constraint checks for import DTOs.
//!
//! # Responsibility
//! - Check each DTO shape against its declared constraints.
//! - Report every violated constraint, not just the first one.
//!
//! # Invariants
//! - A DTO is valid iff its violation list is empty.
//! - Nested collections are not checked here: a creator's boardgames are
//!   validated one by one by the importer.
//! - Text length is counted in characters, not bytes.

use crate::dto::import::{ImportBoardgameDto, ImportCreatorDto, ImportSellerDto};
use crate::model::boardgame::CategoryType;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static WEBSITE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^www\.[a-zA-Z0-9-]+\.com$").expect("valid website regex"));

pub const CREATOR_NAME_LEN: (usize, usize) = (2, 7);
pub const BOARDGAME_NAME_LEN: (usize, usize) = (10, 20);
pub const BOARDGAME_RATING: (f64, f64) = (1.0, 10.0);
pub const BOARDGAME_YEAR: (i32, i32) = (2018, 2023);
pub const SELLER_NAME_LEN: (usize, usize) = (5, 20);
pub const SELLER_ADDRESS_LEN: (usize, usize) = (2, 30);

/// Kind of rule a field broke.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Missing, empty, or whitespace-only.
    Required,
    Length { min: usize, max: usize },
    Range { min: f64, max: f64 },
    Pattern(&'static str),
    /// Integer code outside the enumeration.
    Enumeration,
}

/// One violated constraint on one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: &'static str,
    pub constraint: Constraint,
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.constraint {
            Constraint::Required => write!(f, "{} is required", self.field),
            Constraint::Length { min, max } => {
                write!(f, "{} length must be between {min} and {max}", self.field)
            }
            Constraint::Range { min, max } => {
                write!(f, "{} must be between {min} and {max}", self.field)
            }
            Constraint::Pattern(pattern) => {
                write!(f, "{} must match `{pattern}`", self.field)
            }
            Constraint::Enumeration => write!(f, "{} is not a known value", self.field),
        }
    }
}

/// Explicit constraint check implemented per DTO shape.
pub trait Validate {
    /// Returns all violated constraints; empty when valid.
    fn violations(&self) -> Vec<Violation>;

    fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

impl Validate for ImportCreatorDto {
    fn violations(&self) -> Vec<Violation> {
        let mut checks = Checks::default();
        checks.text("FirstName", self.first_name.as_deref(), Some(CREATOR_NAME_LEN));
        checks.text("LastName", self.last_name.as_deref(), Some(CREATOR_NAME_LEN));
        checks.finish()
    }
}

impl Validate for ImportBoardgameDto {
    fn violations(&self) -> Vec<Violation> {
        let mut checks = Checks::default();
        checks.text("Name", self.name.as_deref(), Some(BOARDGAME_NAME_LEN));
        checks.range("Rating", self.rating, BOARDGAME_RATING);
        checks.range(
            "YearPublished",
            self.year_published.map(f64::from),
            (f64::from(BOARDGAME_YEAR.0), f64::from(BOARDGAME_YEAR.1)),
        );
        match self.category_type {
            None => checks.fail("CategoryType", Constraint::Required),
            Some(code) if CategoryType::from_code(code).is_none() => {
                checks.fail("CategoryType", Constraint::Enumeration)
            }
            Some(_) => {}
        }
        checks.text("Mechanics", self.mechanics.as_deref(), None);
        checks.finish()
    }
}

impl Validate for ImportSellerDto {
    fn violations(&self) -> Vec<Violation> {
        let mut checks = Checks::default();
        checks.text("Name", self.name.as_deref(), Some(SELLER_NAME_LEN));
        checks.text("Address", self.address.as_deref(), Some(SELLER_ADDRESS_LEN));
        checks.text("Country", self.country.as_deref(), None);
        if let Some(website) = checks.text("Website", self.website.as_deref(), None) {
            if !WEBSITE_RE.is_match(website) {
                checks.fail("Website", Constraint::Pattern(WEBSITE_RE.as_str()));
            }
        }
        checks.finish()
    }
}

#[derive(Default)]
struct Checks {
    violations: Vec<Violation>,
}

impl Checks {
    fn fail(&mut self, field: &'static str, constraint: Constraint) {
        self.violations.push(Violation { field, constraint });
    }

    /// Required text with optional length bounds. Returns the value when
    /// present so callers can chain further checks.
    fn text<'a>(
        &mut self,
        field: &'static str,
        value: Option<&'a str>,
        length: Option<(usize, usize)>,
    ) -> Option<&'a str> {
        let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
            self.fail(field, Constraint::Required);
            return None;
        };

        if let Some((min, max)) = length {
            let len = value.chars().count();
            if len < min || len > max {
                self.fail(field, Constraint::Length { min, max });
            }
        }
        Some(value)
    }

    fn range(&mut self, field: &'static str, value: Option<f64>, (min, max): (f64, f64)) {
        match value {
            None => self.fail(field, Constraint::Required),
            Some(value) if !(min..=max).contains(&value) => {
                self.fail(field, Constraint::Range { min, max })
            }
            Some(_) => {}
        }
    }

    fn finish(self) -> Vec<Violation> {
        self.violations
    }
}
