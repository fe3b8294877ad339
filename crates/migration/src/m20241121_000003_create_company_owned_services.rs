//! Create `company_owned_services`, the DRC↔service assignment table.
//!
//! No unique constraint on (drc_id, service_id): duplicate Inactive rows are
//! legal, and the single-Active invariant lives in the assignment service.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyOwnedServices::Table)
                    .if_not_exists()
                    .col(big_integer(CompanyOwnedServices::Id).auto_increment().primary_key())
                    .col(big_integer(CompanyOwnedServices::DrcId).not_null())
                    .col(big_integer(CompanyOwnedServices::ServiceId).not_null())
                    .col(string_len(CompanyOwnedServices::AssignmentStatus, 16).not_null())
                    .col(string_len(CompanyOwnedServices::CreatedBy, 64).not_null())
                    .col(timestamp(CompanyOwnedServices::CreatedAt).not_null())
                    .col(string_len(CompanyOwnedServices::ChangedBy, 64).not_null())
                    .col(timestamp(CompanyOwnedServices::ChangedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyOwnedServices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyOwnedServices {
    Table,
    Id,
    DrcId,
    ServiceId,
    AssignmentStatus,
    CreatedBy,
    CreatedAt,
    ChangedBy,
    ChangedAt,
}
