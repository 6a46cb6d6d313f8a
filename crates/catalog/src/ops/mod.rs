//! CRUD and referential-integrity services, grouped per entity.
//!
//! Every operation validates its input completely before the first mutating
//! statement runs; reference checks are explicit existence queries, not
//! database constraints (except the activity -> sub-activity ownership, which
//! also carries a foreign key).

use uuid::Uuid;

use crate::{Catalog, CatalogError, ResultCatalog};

mod activities;
mod sub_activities;
mod transaction_types;

/// Parses a caller-supplied identifier, rejecting malformed values before any
/// query runs. Returns the normalized string form used for storage lookups.
fn parse_id(value: &str, resource: &'static str) -> ResultCatalog<String> {
    match Uuid::parse_str(value) {
        Ok(id) => Ok(id.to_string()),
        Err(_) => Err(CatalogError::InvalidId(resource)),
    }
}

/// Parses a reference field from a create payload, folding both "missing" and
/// "malformed" into the caller-facing message.
fn parse_ref(value: Option<&str>, message: &str) -> ResultCatalog<String> {
    value
        .and_then(|value| Uuid::parse_str(value).ok())
        .map(|id| id.to_string())
        .ok_or_else(|| CatalogError::Validation(message.to_string()))
}
