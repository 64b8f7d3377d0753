//! Serialization-boundary shapes.
//!
//! Import DTOs keep every field optional so a missing value surfaces as a
//! validation violation instead of a parse failure. Export DTOs carry the
//! exact field names written to XML/JSON.

pub mod export;
pub mod import;
