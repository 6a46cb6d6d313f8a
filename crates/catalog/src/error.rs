//! The module contains the errors the catalog can produce.
//!
//! The variants map one-to-one onto HTTP status classes at the server
//! boundary:
//!
//! - [`InvalidId`] and [`Validation`] for malformed or incomplete input.
//! - [`Conflict`] for uniqueness violations.
//! - [`NotFound`] when an id does not resolve to a row.
//! - [`Database`] for unexpected persistence failures.
//!
//! [`InvalidId`]: CatalogError::InvalidId
//! [`Validation`]: CatalogError::Validation
//! [`Conflict`]: CatalogError::Conflict
//! [`NotFound`]: CatalogError::NotFound
//! [`Database`]: CatalogError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Catalog custom errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid {0} ID")]
    InvalidId(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for CatalogError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidId(a), Self::InvalidId(b)) => a == b,
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::Conflict(a), Self::Conflict(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
