//! Create services table
//!
//! Services reference their stylist through `stylist_id` only; there is no
//! foreign key so a partially written profile stays readable.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Services::Price).double().not_null())
                    .col(
                        ColumnDef::new(Services::CurrencySymbol)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::CurrencyName)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Services::StylistId).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_services_stylist_id")
                    .table(Services::Table)
                    .col(Services::StylistId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Services {
    Table,
    Id,
    Name,
    Price,
    CurrencySymbol,
    CurrencyName,
    StylistId,
}
