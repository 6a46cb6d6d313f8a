//! The module contains the `Activity` entity and its write payloads.

use sea_orm::entity::prelude::*;

use crate::CatalogError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub act_srl: String,
    pub transaction_type_id: String,
    pub activity_name_en: String,
    pub activity_name_ar: String,
    pub activity_code: String,
    pub portal_activity_name_en: String,
    pub portal_activity_name_ar: String,
    pub is_with_items: bool,
    pub finance_effect: bool,
    pub sign: bool,
    pub is_ops_active: bool,
    pub is_portal_active: bool,
    pub is_in_order_screen: bool,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sub_activities::Entity")]
    SubActivities,
    #[sea_orm(
        belongs_to = "super::transaction_types::Entity",
        from = "Column::TransactionTypeId",
        to = "super::transaction_types::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TransactionTypes,
}

impl Related<super::sub_activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubActivities.def()
    }
}

impl Related<super::transaction_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Create payload for an activity.
///
/// Every field is mandatory. `None` marks an omitted field; a boolean sent as
/// `false` is present, not missing.
#[derive(Clone, Debug, Default)]
pub struct ActivityDraft {
    pub act_srl: Option<String>,
    pub transaction_type_id: Option<String>,
    pub activity_name_en: Option<String>,
    pub activity_name_ar: Option<String>,
    pub activity_code: Option<String>,
    pub portal_activity_name_en: Option<String>,
    pub portal_activity_name_ar: Option<String>,
    pub is_with_items: Option<bool>,
    pub finance_effect: Option<bool>,
    pub sign: Option<bool>,
    pub is_ops_active: Option<bool>,
    pub is_portal_active: Option<bool>,
    pub is_in_order_screen: Option<bool>,
    pub is_active: Option<bool>,
}

/// A fully supplied activity, produced by [`ActivityDraft::into_fields`].
#[derive(Clone, Debug)]
pub struct ActivityFields {
    pub act_srl: String,
    pub transaction_type_id: String,
    pub activity_name_en: String,
    pub activity_name_ar: String,
    pub activity_code: String,
    pub portal_activity_name_en: String,
    pub portal_activity_name_ar: String,
    pub is_with_items: bool,
    pub finance_effect: bool,
    pub sign: bool,
    pub is_ops_active: bool,
    pub is_portal_active: bool,
    pub is_in_order_screen: bool,
    pub is_active: bool,
}

impl ActivityDraft {
    /// Splits the draft into its concrete fields, or the wire names of the
    /// fields the caller left out.
    pub fn into_fields(self) -> Result<ActivityFields, Vec<&'static str>> {
        match self {
            ActivityDraft {
                act_srl: Some(act_srl),
                transaction_type_id: Some(transaction_type_id),
                activity_name_en: Some(activity_name_en),
                activity_name_ar: Some(activity_name_ar),
                activity_code: Some(activity_code),
                portal_activity_name_en: Some(portal_activity_name_en),
                portal_activity_name_ar: Some(portal_activity_name_ar),
                is_with_items: Some(is_with_items),
                finance_effect: Some(finance_effect),
                sign: Some(sign),
                is_ops_active: Some(is_ops_active),
                is_portal_active: Some(is_portal_active),
                is_in_order_screen: Some(is_in_order_screen),
                is_active: Some(is_active),
            } => Ok(ActivityFields {
                act_srl,
                transaction_type_id,
                activity_name_en,
                activity_name_ar,
                activity_code,
                portal_activity_name_en,
                portal_activity_name_ar,
                is_with_items,
                finance_effect,
                sign,
                is_ops_active,
                is_portal_active,
                is_in_order_screen,
                is_active,
            }),
            draft => Err(draft.missing_fields()),
        }
    }

    /// Wire names of the required fields the caller left out.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.act_srl.is_none() {
            missing.push("actSrl");
        }
        if self.transaction_type_id.is_none() {
            missing.push("activityTransactionType");
        }
        if self.activity_name_en.is_none() {
            missing.push("activityNameEn");
        }
        if self.activity_name_ar.is_none() {
            missing.push("activityNameAr");
        }
        if self.activity_code.is_none() {
            missing.push("activityCode");
        }
        if self.portal_activity_name_en.is_none() {
            missing.push("portalActivityNameEn");
        }
        if self.portal_activity_name_ar.is_none() {
            missing.push("portalActivityNameAr");
        }
        if self.is_with_items.is_none() {
            missing.push("isWithItems");
        }
        if self.finance_effect.is_none() {
            missing.push("financeEffect");
        }
        if self.sign.is_none() {
            missing.push("sign");
        }
        if self.is_ops_active.is_none() {
            missing.push("isOpsActive");
        }
        if self.is_portal_active.is_none() {
            missing.push("isPortalActive");
        }
        if self.is_in_order_screen.is_none() {
            missing.push("isInOrderScreen");
        }
        if self.is_active.is_none() {
            missing.push("isActive");
        }
        missing
    }
}

/// Update payload for an activity; only supplied fields are merged.
#[derive(Clone, Debug, Default)]
pub struct ActivityPatch {
    pub act_srl: Option<String>,
    pub transaction_type_id: Option<String>,
    pub activity_name_en: Option<String>,
    pub activity_name_ar: Option<String>,
    pub activity_code: Option<String>,
    pub portal_activity_name_en: Option<String>,
    pub portal_activity_name_ar: Option<String>,
    pub is_with_items: Option<bool>,
    pub finance_effect: Option<bool>,
    pub sign: Option<bool>,
    pub is_ops_active: Option<bool>,
    pub is_portal_active: Option<bool>,
    pub is_in_order_screen: Option<bool>,
    pub is_active: Option<bool>,
}

impl ActivityPatch {
    pub fn is_empty(&self) -> bool {
        self.act_srl.is_none()
            && self.transaction_type_id.is_none()
            && self.activity_name_en.is_none()
            && self.activity_name_ar.is_none()
            && self.activity_code.is_none()
            && self.portal_activity_name_en.is_none()
            && self.portal_activity_name_ar.is_none()
            && self.is_with_items.is_none()
            && self.finance_effect.is_none()
            && self.sign.is_none()
            && self.is_ops_active.is_none()
            && self.is_portal_active.is_none()
            && self.is_in_order_screen.is_none()
            && self.is_active.is_none()
    }

    /// Field-level validation of the supplied values: supplied strings must
    /// stay non-empty. One message per invalid field.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut problems = Vec::new();
        let check = |problems: &mut Vec<String>, value: &Option<String>, field: &str| {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    problems.push(format!("{field} cannot be empty"));
                }
            }
        };

        check(&mut problems, &self.act_srl, "actSrl");
        check(
            &mut problems,
            &self.transaction_type_id,
            "activityTransactionType",
        );
        check(&mut problems, &self.activity_name_en, "activityNameEn");
        check(&mut problems, &self.activity_name_ar, "activityNameAr");
        check(&mut problems, &self.activity_code, "activityCode");
        check(
            &mut problems,
            &self.portal_activity_name_en,
            "portalActivityNameEn",
        );
        check(
            &mut problems,
            &self.portal_activity_name_ar,
            "portalActivityNameAr",
        );

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Validation(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_every_omission() {
        let draft = ActivityDraft::default();
        assert_eq!(draft.missing_fields().len(), 14);
        assert!(draft.into_fields().is_err());
    }

    #[test]
    fn false_booleans_are_not_missing() {
        let draft = ActivityDraft {
            is_with_items: Some(false),
            finance_effect: Some(false),
            ..Default::default()
        };
        let missing = draft.missing_fields();
        assert!(!missing.contains(&"isWithItems"));
        assert!(!missing.contains(&"financeEffect"));
        assert!(missing.contains(&"actSrl"));
    }

    #[test]
    fn empty_patch_detected() {
        assert!(ActivityPatch::default().is_empty());
        assert!(
            !ActivityPatch {
                sign: Some(true),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn patch_rejects_blank_strings_per_field() {
        let patch = ActivityPatch {
            act_srl: Some("  ".to_string()),
            activity_code: Some(String::new()),
            activity_name_en: Some("Moving".to_string()),
            ..Default::default()
        };
        let err = patch.validate().unwrap_err();
        assert_eq!(
            err,
            CatalogError::Validation(
                "actSrl cannot be empty; activityCode cannot be empty".to_string()
            )
        );
    }
}
