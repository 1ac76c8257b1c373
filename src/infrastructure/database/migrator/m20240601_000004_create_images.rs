//! Create images table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Images::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Images::Id).string().not_null().primary_key())
                    .col(
                        ColumnDef::new(Images::Type)
                            .string_len(20)
                            .not_null()
                            .default("stylist"),
                    )
                    .col(ColumnDef::new(Images::Url).text().not_null())
                    .col(ColumnDef::new(Images::StylistId).string().not_null())
                    .col(ColumnDef::new(Images::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_images_stylist_id")
                    .table(Images::Table)
                    .col(Images::StylistId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Images::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Images {
    Table,
    Id,
    Type,
    Url,
    StylistId,
    CreatedAt,
}
