//! Initial schema migration - creates all tables from scratch.
//!
//! - `transaction_types`: named classifications, unique by name
//! - `activities`: operational activities, unique by `act_srl`
//! - `sub_activities`: portal items owned by one activity
//!
//! Transaction-type references are deliberately not foreign keys: a
//! transaction type is deletable independently and referencing rows keep a
//! dangling id. Ownership of sub-activities by an activity is a real foreign
//! key with ON DELETE CASCADE.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum TransactionTypes {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Activities {
    Table,
    Id,
    ActSrl,
    TransactionTypeId,
    ActivityNameEn,
    ActivityNameAr,
    ActivityCode,
    PortalActivityNameEn,
    PortalActivityNameAr,
    IsWithItems,
    FinanceEffect,
    Sign,
    IsOpsActive,
    IsPortalActive,
    IsInOrderScreen,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SubActivities {
    Table,
    Id,
    TransactionTypeId,
    ActivityId,
    PricingMethod,
    PortalItemNameEn,
    PortalItemNameAr,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransactionTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TransactionTypes::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TransactionTypes::Name).string().not_null())
                    .col(
                        ColumnDef::new(TransactionTypes::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TransactionTypes::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transaction_types-name-unique")
                    .table(TransactionTypes::Table)
                    .col(TransactionTypes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Activities::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Activities::ActSrl).string().not_null())
                    .col(
                        ColumnDef::new(Activities::TransactionTypeId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Activities::ActivityNameEn)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Activities::ActivityNameAr)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Activities::ActivityCode).string().not_null())
                    .col(
                        ColumnDef::new(Activities::PortalActivityNameEn)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Activities::PortalActivityNameAr)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Activities::IsWithItems)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Activities::FinanceEffect)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Activities::Sign).boolean().not_null())
                    .col(
                        ColumnDef::new(Activities::IsOpsActive)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Activities::IsPortalActive)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Activities::IsInOrderScreen)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Activities::IsActive).boolean().not_null())
                    .col(ColumnDef::new(Activities::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Activities::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-activities-act_srl-unique")
                    .table(Activities::Table)
                    .col(Activities::ActSrl)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubActivities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubActivities::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubActivities::TransactionTypeId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SubActivities::ActivityId).string().not_null())
                    .col(
                        ColumnDef::new(SubActivities::PricingMethod)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubActivities::PortalItemNameEn)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubActivities::PortalItemNameAr)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SubActivities::IsActive).boolean().not_null())
                    .col(
                        ColumnDef::new(SubActivities::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubActivities::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sub_activities-activity_id")
                            .from(SubActivities::Table, SubActivities::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-sub_activities-activity_id-created_at")
                    .table(SubActivities::Table)
                    .col(SubActivities::ActivityId)
                    .col(SubActivities::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(SubActivities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TransactionTypes::Table).to_owned())
            .await?;
        Ok(())
    }
}
