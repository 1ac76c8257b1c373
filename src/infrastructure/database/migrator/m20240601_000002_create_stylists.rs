//! Create stylists table
//!
//! The unique index on `user_id` enforces one profile per user at the
//! storage layer, so two concurrent creations cannot both succeed.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stylists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stylists::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stylists::UserId).string().not_null())
                    .col(ColumnDef::new(Stylists::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Stylists::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stylists_user_id")
                    .table(Stylists::Table)
                    .col(Stylists::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stylists::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Stylists {
    Table,
    Id,
    UserId,
    CreatedAt,
    UpdatedAt,
}
