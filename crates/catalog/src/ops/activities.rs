use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    CatalogError, ResultCatalog, activities,
    activities::{ActivityDraft, ActivityPatch},
    sub_activities,
};

use super::{Catalog, parse_id};

impl Catalog {
    pub async fn list_activities(&self) -> ResultCatalog<Vec<activities::Model>> {
        Ok(activities::Entity::find().all(&self.database).await?)
    }

    /// Returns an activity together with its sub-activities.
    ///
    /// The sub-activity list is a reverse lookup on `activity_id`, resolved
    /// at read time; it is never stored on the activity row.
    pub async fn activity(
        &self,
        id: &str,
    ) -> ResultCatalog<(activities::Model, Vec<sub_activities::Model>)> {
        let id = parse_id(id, "activity")?;

        let Some(model) = activities::Entity::find_by_id(id).one(&self.database).await? else {
            return Err(CatalogError::NotFound("Activity"));
        };

        let subs = self.sub_activities_of(&model.id).await?;
        Ok((model, subs))
    }

    /// Creates an activity. All fourteen fields are mandatory; booleans must
    /// be present even when `false`.
    pub async fn create_activity(&self, draft: ActivityDraft) -> ResultCatalog<activities::Model> {
        let fields = draft.into_fields().map_err(|missing| {
            CatalogError::Validation(format!(
                "All fields are required; missing: {}",
                missing.join(", ")
            ))
        })?;

        let transaction_type_id = parse_id(&fields.transaction_type_id, "transaction type")?;
        self.require_transaction_type(&transaction_type_id).await?;

        let existing = activities::Entity::find()
            .filter(activities::Column::ActSrl.eq(fields.act_srl.clone()))
            .one(&self.database)
            .await?;
        if existing.is_some() {
            return Err(CatalogError::Conflict(
                "Activity with this actSrl already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let model = activities::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            act_srl: ActiveValue::Set(fields.act_srl),
            transaction_type_id: ActiveValue::Set(transaction_type_id),
            activity_name_en: ActiveValue::Set(fields.activity_name_en),
            activity_name_ar: ActiveValue::Set(fields.activity_name_ar),
            activity_code: ActiveValue::Set(fields.activity_code),
            portal_activity_name_en: ActiveValue::Set(fields.portal_activity_name_en),
            portal_activity_name_ar: ActiveValue::Set(fields.portal_activity_name_ar),
            is_with_items: ActiveValue::Set(fields.is_with_items),
            finance_effect: ActiveValue::Set(fields.finance_effect),
            sign: ActiveValue::Set(fields.sign),
            is_ops_active: ActiveValue::Set(fields.is_ops_active),
            is_portal_active: ActiveValue::Set(fields.is_portal_active),
            is_in_order_screen: ActiveValue::Set(fields.is_in_order_screen),
            is_active: ActiveValue::Set(fields.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };
        Ok(model.insert(&self.database).await?)
    }

    /// Merges the supplied fields into an existing activity.
    ///
    /// Changing `act_srl` onto a value held by a different row is a conflict;
    /// re-submitting the row's own value is permitted.
    pub async fn update_activity(
        &self,
        id: &str,
        patch: ActivityPatch,
    ) -> ResultCatalog<(activities::Model, Vec<sub_activities::Model>)> {
        let id = parse_id(id, "activity")?;

        if patch.is_empty() {
            return Err(CatalogError::Validation(
                "Must supply at least one field to update".to_string(),
            ));
        }
        patch.validate()?;

        let Some(existing) = activities::Entity::find_by_id(id.clone())
            .one(&self.database)
            .await?
        else {
            return Err(CatalogError::NotFound("Activity"));
        };

        let transaction_type_id = match patch.transaction_type_id.as_deref() {
            Some(value) => {
                let tt_id = parse_id(value, "transaction type")?;
                self.require_transaction_type(&tt_id).await?;
                Some(tt_id)
            }
            None => None,
        };

        if let Some(act_srl) = &patch.act_srl {
            if *act_srl != existing.act_srl {
                let conflict = activities::Entity::find()
                    .filter(activities::Column::ActSrl.eq(act_srl.clone()))
                    .filter(activities::Column::Id.ne(id.clone()))
                    .one(&self.database)
                    .await?;
                if conflict.is_some() {
                    return Err(CatalogError::Conflict(
                        "Activity with this actSrl already exists".to_string(),
                    ));
                }
            }
        }

        let mut model = activities::ActiveModel {
            id: ActiveValue::Set(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(value) = patch.act_srl {
            model.act_srl = ActiveValue::Set(value);
        }
        if let Some(value) = transaction_type_id {
            model.transaction_type_id = ActiveValue::Set(value);
        }
        if let Some(value) = patch.activity_name_en {
            model.activity_name_en = ActiveValue::Set(value);
        }
        if let Some(value) = patch.activity_name_ar {
            model.activity_name_ar = ActiveValue::Set(value);
        }
        if let Some(value) = patch.activity_code {
            model.activity_code = ActiveValue::Set(value);
        }
        if let Some(value) = patch.portal_activity_name_en {
            model.portal_activity_name_en = ActiveValue::Set(value);
        }
        if let Some(value) = patch.portal_activity_name_ar {
            model.portal_activity_name_ar = ActiveValue::Set(value);
        }
        if let Some(value) = patch.is_with_items {
            model.is_with_items = ActiveValue::Set(value);
        }
        if let Some(value) = patch.finance_effect {
            model.finance_effect = ActiveValue::Set(value);
        }
        if let Some(value) = patch.sign {
            model.sign = ActiveValue::Set(value);
        }
        if let Some(value) = patch.is_ops_active {
            model.is_ops_active = ActiveValue::Set(value);
        }
        if let Some(value) = patch.is_portal_active {
            model.is_portal_active = ActiveValue::Set(value);
        }
        if let Some(value) = patch.is_in_order_screen {
            model.is_in_order_screen = ActiveValue::Set(value);
        }
        if let Some(value) = patch.is_active {
            model.is_active = ActiveValue::Set(value);
        }

        let updated = model.update(&self.database).await?;
        let subs = self.sub_activities_of(&updated.id).await?;
        Ok((updated, subs))
    }

    /// Deletes an activity and every sub-activity that references it, in a
    /// single database transaction.
    pub async fn delete_activity(&self, id: &str) -> ResultCatalog<()> {
        let id = parse_id(id, "activity")?;

        let db_tx = self.database.begin().await?;

        let Some(model) = activities::Entity::find_by_id(id.clone()).one(&db_tx).await? else {
            return Err(CatalogError::NotFound("Activity"));
        };

        sub_activities::Entity::delete_many()
            .filter(sub_activities::Column::ActivityId.eq(id))
            .exec(&db_tx)
            .await?;
        model.delete(&db_tx).await?;

        db_tx.commit().await?;
        Ok(())
    }

    pub(super) async fn sub_activities_of(
        &self,
        activity_id: &str,
    ) -> ResultCatalog<Vec<sub_activities::Model>> {
        Ok(sub_activities::Entity::find()
            .filter(sub_activities::Column::ActivityId.eq(activity_id))
            .all(&self.database)
            .await?)
    }

    /// Referential check used by sub-activity writes.
    pub(super) async fn require_activity(&self, id: &str) -> ResultCatalog<()> {
        if activities::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .is_none()
        {
            return Err(CatalogError::Validation("Activity not found".to_string()));
        }
        Ok(())
    }
}
