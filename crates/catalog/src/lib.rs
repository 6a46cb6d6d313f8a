//! Catalog core: the data model, validation rules and CRUD services for
//! activities, sub-activities and transaction types.
//!
//! An `Activity` is an operational activity offered through the ops and
//! portal frontends. Each activity references one `TransactionType` and owns
//! any number of `SubActivity` rows (a reverse lookup, never stored on the
//! activity itself). Sub-activities reference both their owning activity and
//! a transaction type of their own.

use sea_orm::DatabaseConnection;

pub use activities::{ActivityDraft, ActivityFields, ActivityPatch};
pub use error::CatalogError;
pub use sub_activities::{PricingMethod, SubActivityDraft, SubActivityPatch};

pub mod activities;
mod error;
mod ops;
pub mod sub_activities;
pub mod transaction_types;

type ResultCatalog<T> = Result<T, CatalogError>;

/// Entry point for all catalog operations.
///
/// Wraps the database handle. The handle is created (and migrated) once at
/// process startup, before any request is accepted.
#[derive(Debug)]
pub struct Catalog {
    database: DatabaseConnection,
}

impl Catalog {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}
