//! The module contains the `SubActivity` entity, its pricing method and its
//! write payloads.

use sea_orm::entity::prelude::*;

use crate::CatalogError;

/// How a sub-activity is priced on the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PricingMethod {
    Manual,
    Fixed,
    PerItem,
    PerLocation,
}

impl PricingMethod {
    /// Canonical wire/database string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Fixed => "fixed",
            Self::PerItem => "perItem",
            Self::PerLocation => "perLocation",
        }
    }
}

impl TryFrom<&str> for PricingMethod {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "manual" => Ok(Self::Manual),
            "fixed" => Ok(Self::Fixed),
            "perItem" => Ok(Self::PerItem),
            "perLocation" => Ok(Self::PerLocation),
            _ => Err(CatalogError::Validation(
                "Invalid pricing method".to_string(),
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sub_activities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub transaction_type_id: String,
    pub activity_id: String,
    pub pricing_method: String,
    pub portal_item_name_en: String,
    pub portal_item_name_ar: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::activities::Entity",
        from = "Column::ActivityId",
        to = "super::activities::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Activities,
    #[sea_orm(
        belongs_to = "super::transaction_types::Entity",
        from = "Column::TransactionTypeId",
        to = "super::transaction_types::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TransactionTypes,
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl Related<super::transaction_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Create payload for a sub-activity. Every field is mandatory.
#[derive(Clone, Debug, Default)]
pub struct SubActivityDraft {
    pub transaction_type_id: Option<String>,
    pub activity_id: Option<String>,
    pub pricing_method: Option<String>,
    pub portal_item_name_en: Option<String>,
    pub portal_item_name_ar: Option<String>,
    pub is_active: Option<bool>,
}

/// Update payload; only supplied fields are merged.
#[derive(Clone, Debug, Default)]
pub struct SubActivityPatch {
    pub transaction_type_id: Option<String>,
    pub activity_id: Option<String>,
    pub pricing_method: Option<String>,
    pub portal_item_name_en: Option<String>,
    pub portal_item_name_ar: Option<String>,
    pub is_active: Option<bool>,
}

impl SubActivityPatch {
    pub fn is_empty(&self) -> bool {
        self.transaction_type_id.is_none()
            && self.activity_id.is_none()
            && self.pricing_method.is_none()
            && self.portal_item_name_en.is_none()
            && self.portal_item_name_ar.is_none()
            && self.is_active.is_none()
    }

    /// Supplied portal names must stay non-empty after trimming.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut problems = Vec::new();
        for (value, field) in [
            (&self.portal_item_name_en, "portalItemNameEn"),
            (&self.portal_item_name_ar, "portalItemNameAr"),
        ] {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    problems.push(format!("{field} cannot be empty"));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Validation(problems.join("; ")))
        }
    }
}
