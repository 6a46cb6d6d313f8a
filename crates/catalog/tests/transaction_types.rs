use catalog::{Catalog, CatalogError};
use migration::MigratorTrait;
use sea_orm::Database;

async fn catalog() -> Catalog {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Catalog::new(db)
}

#[tokio::test]
async fn create_trims_and_persists() {
    let catalog = catalog().await;

    let created = catalog.create_transaction_type("  Moving  ").await.unwrap();
    assert_eq!(created.name, "Moving");

    let fetched = catalog.transaction_type(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_rejects_invalid_names() {
    let catalog = catalog().await;

    assert_eq!(
        catalog.create_transaction_type("   ").await,
        Err(CatalogError::Validation("Name is required".to_string()))
    );
    assert_eq!(
        catalog.create_transaction_type("x").await,
        Err(CatalogError::Validation(
            "Name must be between 2 and 50 characters".to_string()
        ))
    );
    assert!(catalog.create_transaction_type(&"x".repeat(51)).await.is_err());

    assert!(catalog.list_transaction_types().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_name_is_a_conflict() {
    let catalog = catalog().await;

    catalog.create_transaction_type("Moving").await.unwrap();
    assert_eq!(
        catalog.create_transaction_type("Moving").await,
        Err(CatalogError::Conflict(
            "Transaction type with this name already exists".to_string()
        ))
    );

    assert_eq!(catalog.list_transaction_types().await.unwrap().len(), 1);
}

#[tokio::test]
async fn lookup_with_malformed_id_never_reaches_the_store() {
    let catalog = catalog().await;

    assert_eq!(
        catalog.transaction_type("not-an-id").await,
        Err(CatalogError::InvalidId("transaction type"))
    );
    assert_eq!(
        catalog.delete_transaction_type("not-an-id").await,
        Err(CatalogError::InvalidId("transaction type"))
    );
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let catalog = catalog().await;
    let id = "0b5cbb4e-13d8-4ab9-9013-96ad8a5a3f71";

    assert_eq!(
        catalog.transaction_type(id).await,
        Err(CatalogError::NotFound("Transaction type"))
    );
    assert_eq!(
        catalog.update_transaction_type(id, "Storage").await,
        Err(CatalogError::NotFound("Transaction type"))
    );
    assert_eq!(
        catalog.delete_transaction_type(id).await,
        Err(CatalogError::NotFound("Transaction type"))
    );
}

#[tokio::test]
async fn rename_to_own_name_is_idempotent() {
    let catalog = catalog().await;

    let moving = catalog.create_transaction_type("Moving").await.unwrap();
    catalog.create_transaction_type("Storage").await.unwrap();

    let renamed = catalog
        .update_transaction_type(&moving.id, "Moving")
        .await
        .unwrap();
    assert_eq!(renamed.name, "Moving");

    assert_eq!(
        catalog.update_transaction_type(&moving.id, "Storage").await,
        Err(CatalogError::Conflict(
            "Transaction type with this name already exists".to_string()
        ))
    );
}

#[tokio::test]
async fn rename_replaces_name_only() {
    let catalog = catalog().await;

    let created = catalog.create_transaction_type("Moving").await.unwrap();
    let renamed = catalog
        .update_transaction_type(&created.id, "Relocation")
        .await
        .unwrap();

    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.name, "Relocation");
    assert_eq!(renamed.created_at, created.created_at);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let catalog = catalog().await;

    let created = catalog.create_transaction_type("Moving").await.unwrap();
    catalog.delete_transaction_type(&created.id).await.unwrap();

    assert_eq!(
        catalog.transaction_type(&created.id).await,
        Err(CatalogError::NotFound("Transaction type"))
    );
}
