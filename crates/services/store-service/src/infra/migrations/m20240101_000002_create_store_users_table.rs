//! Migration: Create store_users table linking users to stores.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_stores_table::Stores;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoreUsers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StoreUsers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(StoreUsers::StoreId).uuid().not_null())
                    .col(ColumnDef::new(StoreUsers::UserId).string().not_null())
                    .col(
                        ColumnDef::new(StoreUsers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_store_users_store_id")
                            .from(StoreUsers::Table, StoreUsers::StoreId)
                            .to(Stores::Table, Stores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One membership per user and store
        manager
            .create_index(
                Index::create()
                    .name("idx_store_users_store_id_user_id")
                    .table(StoreUsers::Table)
                    .col(StoreUsers::StoreId)
                    .col(StoreUsers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Listing a user's stores filters on user_id
        manager
            .create_index(
                Index::create()
                    .name("idx_store_users_user_id")
                    .table(StoreUsers::Table)
                    .col(StoreUsers::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoreUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StoreUsers {
    Table,
    Id,
    StoreId,
    UserId,
    CreatedAt,
}
