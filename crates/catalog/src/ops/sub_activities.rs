use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    CatalogError, ResultCatalog, activities, sub_activities,
    sub_activities::{PricingMethod, SubActivityDraft, SubActivityPatch},
    transaction_types,
};

use super::{Catalog, parse_id, parse_ref};

impl Catalog {
    /// Returns a sub-activity with both of its references resolved.
    ///
    /// Either reference may come back `None`: transaction types are deletable
    /// independently, so a stored reference can dangle.
    pub async fn sub_activity(
        &self,
        id: &str,
    ) -> ResultCatalog<(
        sub_activities::Model,
        Option<transaction_types::Model>,
        Option<activities::Model>,
    )> {
        let id = parse_id(id, "sub-activity")?;

        let Some(model) = sub_activities::Entity::find_by_id(id)
            .one(&self.database)
            .await?
        else {
            return Err(CatalogError::NotFound("Sub-activity"));
        };

        let transaction_type =
            transaction_types::Entity::find_by_id(model.transaction_type_id.clone())
                .one(&self.database)
                .await?;
        let activity = activities::Entity::find_by_id(model.activity_id.clone())
            .one(&self.database)
            .await?;

        Ok((model, transaction_type, activity))
    }

    /// Creates a sub-activity under an existing activity.
    pub async fn create_sub_activity(
        &self,
        draft: SubActivityDraft,
    ) -> ResultCatalog<sub_activities::Model> {
        let transaction_type_id = parse_ref(
            draft.transaction_type_id.as_deref(),
            "Missing or invalid transactionType",
        )?;
        let activity_id = parse_ref(draft.activity_id.as_deref(), "Missing or invalid activity")?;

        let Some(pricing_method) = draft.pricing_method.as_deref() else {
            return Err(CatalogError::Validation(
                "Missing required fields".to_string(),
            ));
        };
        let pricing_method = PricingMethod::try_from(pricing_method)?;

        let portal_item_name_en = draft
            .portal_item_name_en
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());
        let portal_item_name_ar = draft
            .portal_item_name_ar
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());
        let (Some(portal_item_name_en), Some(portal_item_name_ar), Some(is_active)) =
            (portal_item_name_en, portal_item_name_ar, draft.is_active)
        else {
            return Err(CatalogError::Validation(
                "Missing required fields".to_string(),
            ));
        };

        self.require_activity(&activity_id).await?;
        self.require_transaction_type(&transaction_type_id).await?;

        let now = Utc::now();
        let model = sub_activities::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            transaction_type_id: ActiveValue::Set(transaction_type_id),
            activity_id: ActiveValue::Set(activity_id),
            pricing_method: ActiveValue::Set(pricing_method.as_str().to_string()),
            portal_item_name_en: ActiveValue::Set(portal_item_name_en.to_string()),
            portal_item_name_ar: ActiveValue::Set(portal_item_name_ar.to_string()),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };
        Ok(model.insert(&self.database).await?)
    }

    /// Merges the supplied fields into an existing sub-activity. Any supplied
    /// reference must resolve to an existing row.
    pub async fn update_sub_activity(
        &self,
        id: &str,
        patch: SubActivityPatch,
    ) -> ResultCatalog<sub_activities::Model> {
        let id = parse_id(id, "sub-activity")?;

        if patch.is_empty() {
            return Err(CatalogError::Validation(
                "Must supply at least one field to update".to_string(),
            ));
        }
        patch.validate()?;

        if sub_activities::Entity::find_by_id(id.clone())
            .one(&self.database)
            .await?
            .is_none()
        {
            return Err(CatalogError::NotFound("Sub-activity"));
        }

        let transaction_type_id = match patch.transaction_type_id.as_deref() {
            Some(value) => {
                let tt_id = parse_id(value, "transaction type")?;
                self.require_transaction_type(&tt_id).await?;
                Some(tt_id)
            }
            None => None,
        };
        let activity_id = match patch.activity_id.as_deref() {
            Some(value) => {
                let activity_id = parse_id(value, "activity")?;
                self.require_activity(&activity_id).await?;
                Some(activity_id)
            }
            None => None,
        };
        let pricing_method = match patch.pricing_method.as_deref() {
            Some(value) => Some(PricingMethod::try_from(value)?),
            None => None,
        };

        let mut model = sub_activities::ActiveModel {
            id: ActiveValue::Set(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(value) = transaction_type_id {
            model.transaction_type_id = ActiveValue::Set(value);
        }
        if let Some(value) = activity_id {
            model.activity_id = ActiveValue::Set(value);
        }
        if let Some(value) = pricing_method {
            model.pricing_method = ActiveValue::Set(value.as_str().to_string());
        }
        if let Some(value) = patch.portal_item_name_en {
            model.portal_item_name_en = ActiveValue::Set(value.trim().to_string());
        }
        if let Some(value) = patch.portal_item_name_ar {
            model.portal_item_name_ar = ActiveValue::Set(value.trim().to_string());
        }
        if let Some(value) = patch.is_active {
            model.is_active = ActiveValue::Set(value);
        }

        Ok(model.update(&self.database).await?)
    }

    pub async fn delete_sub_activity(&self, id: &str) -> ResultCatalog<()> {
        let id = parse_id(id, "sub-activity")?;

        let Some(model) = sub_activities::Entity::find_by_id(id)
            .one(&self.database)
            .await?
        else {
            return Err(CatalogError::NotFound("Sub-activity"));
        };

        model.delete(&self.database).await?;
        Ok(())
    }

    /// Sub-activities referencing the given activity, newest first, each with
    /// its transaction type resolved.
    ///
    /// The activity itself is not looked up: an unknown id yields an empty
    /// list, not an error.
    pub async fn sub_activities_by_activity(
        &self,
        activity_id: &str,
    ) -> ResultCatalog<Vec<(sub_activities::Model, Option<transaction_types::Model>)>> {
        let activity_id = parse_id(activity_id, "activity")?;

        Ok(sub_activities::Entity::find()
            .filter(sub_activities::Column::ActivityId.eq(activity_id))
            .order_by_desc(sub_activities::Column::CreatedAt)
            .find_also_related(transaction_types::Entity)
            .all(&self.database)
            .await?)
    }
}
