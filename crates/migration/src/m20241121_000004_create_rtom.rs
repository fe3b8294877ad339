//! Create `rtom` (regional operating area) table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rtom::Table)
                    .if_not_exists()
                    .col(big_integer(Rtom::RtomId).primary_key())
                    .col(string_len(Rtom::RtomAbbreviation, 16).not_null())
                    .col(string_len(Rtom::AreaName, 128).not_null())
                    .col(string_len(Rtom::RtomStatus, 16).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Rtom::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Rtom {
    Table,
    RtomId,
    RtomAbbreviation,
    AreaName,
    RtomStatus,
}
