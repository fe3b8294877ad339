//! Create `service_type` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceType::Table)
                    .if_not_exists()
                    .col(big_integer(ServiceType::ServiceId).primary_key())
                    .col(string_len(ServiceType::ServiceType, 128).not_null())
                    .col(string_len(ServiceType::ServiceStatus, 16).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceType {
    Table,
    ServiceId,
    ServiceType,
    ServiceStatus,
}
