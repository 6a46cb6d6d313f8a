use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, prelude::*};
use uuid::Uuid;

use crate::{CatalogError, ResultCatalog, transaction_types};

use super::{Catalog, parse_id};

impl Catalog {
    /// Creates a transaction type with a validated, unique name.
    pub async fn create_transaction_type(
        &self,
        name: &str,
    ) -> ResultCatalog<transaction_types::Model> {
        let name = transaction_types::validate_name(name)?;

        let existing = transaction_types::Entity::find()
            .filter(transaction_types::Column::Name.eq(name.clone()))
            .one(&self.database)
            .await?;
        if existing.is_some() {
            return Err(CatalogError::Conflict(
                "Transaction type with this name already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let model = transaction_types::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };
        Ok(model.insert(&self.database).await?)
    }

    pub async fn list_transaction_types(&self) -> ResultCatalog<Vec<transaction_types::Model>> {
        Ok(transaction_types::Entity::find().all(&self.database).await?)
    }

    pub async fn transaction_type(&self, id: &str) -> ResultCatalog<transaction_types::Model> {
        let id = parse_id(id, "transaction type")?;

        transaction_types::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or(CatalogError::NotFound("Transaction type"))
    }

    /// Renames a transaction type. Re-submitting the current name is allowed;
    /// only a collision with a *different* row is a conflict.
    pub async fn update_transaction_type(
        &self,
        id: &str,
        name: &str,
    ) -> ResultCatalog<transaction_types::Model> {
        let id = parse_id(id, "transaction type")?;
        let name = transaction_types::validate_name(name)?;

        if transaction_types::Entity::find_by_id(id.clone())
            .one(&self.database)
            .await?
            .is_none()
        {
            return Err(CatalogError::NotFound("Transaction type"));
        }

        let conflict = transaction_types::Entity::find()
            .filter(transaction_types::Column::Name.eq(name.clone()))
            .filter(transaction_types::Column::Id.ne(id.clone()))
            .one(&self.database)
            .await?;
        if conflict.is_some() {
            return Err(CatalogError::Conflict(
                "Transaction type with this name already exists".to_string(),
            ));
        }

        let model = transaction_types::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        Ok(model.update(&self.database).await?)
    }

    /// Deletes a transaction type. No cascade: rows referencing it keep their
    /// (now dangling) reference.
    pub async fn delete_transaction_type(&self, id: &str) -> ResultCatalog<()> {
        let id = parse_id(id, "transaction type")?;

        let Some(model) = transaction_types::Entity::find_by_id(id)
            .one(&self.database)
            .await?
        else {
            return Err(CatalogError::NotFound("Transaction type"));
        };

        model.delete(&self.database).await?;
        Ok(())
    }

    /// Referential check used by activity/sub-activity writes. The failure is
    /// a validation error: the *caller's* reference field is invalid, the
    /// addressed resource may well exist.
    pub(super) async fn require_transaction_type(&self, id: &str) -> ResultCatalog<()> {
        if transaction_types::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .is_none()
        {
            return Err(CatalogError::Validation(
                "Transaction type not found".to_string(),
            ));
        }
        Ok(())
    }
}
