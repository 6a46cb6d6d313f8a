//! The module contains the `TransactionType` entity.
//!
//! A transaction type is a named classification referenced by activities and
//! sub-activities. References to it are advisory: deleting a transaction type
//! leaves referencing rows in place.

use sea_orm::entity::prelude::*;

use crate::CatalogError;

/// Bounds on a transaction type name, counted in characters after trimming.
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

/// Validates and normalizes a transaction type name.
pub fn validate_name(input: &str) -> Result<String, CatalogError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(CatalogError::Validation("Name is required".to_string()));
    }

    let chars = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err(CatalogError::Validation(
            "Name must be between 2 and 50 characters".to_string(),
        ));
    }

    Ok(name.to_string())
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transaction_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::activities::Entity")]
    Activities,
    #[sea_orm(has_many = "super::sub_activities::Entity")]
    SubActivities,
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl Related<super::sub_activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubActivities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
