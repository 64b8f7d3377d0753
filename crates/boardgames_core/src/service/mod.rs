//! Import/export use-case services.
//!
//! # Responsibility
//! - Turn payloads into validated entities and persist them in one batch.
//! - Shape stored entities into the export documents.
//!
//! # Invariants
//! - Services only talk to storage through the repository traits.
//! - Per-record problems become report lines; storage failures are returned.

pub mod export_service;
pub mod import_service;
