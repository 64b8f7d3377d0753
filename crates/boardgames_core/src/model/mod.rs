//! Domain entities persisted by the boardgames store.
//!
//! # Responsibility
//! - Define the canonical records imported from payloads and read back for
//!   export projections.
//!
//! # Invariants
//! - Entities only exist after their DTO passed validation.
//! - `id` fields are `None` until the store assigns them on insert.

pub mod boardgame;
pub mod creator;
pub mod seller;
