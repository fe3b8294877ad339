//! Create `debt_recovery_company` table.
//!
//! Primary keys are minted by the document-store sequence counters, never by
//! the database, so `drc_id` carries no auto-increment.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DebtRecoveryCompany::Table)
                    .if_not_exists()
                    .col(big_integer(DebtRecoveryCompany::DrcId).primary_key())
                    .col(string_len(DebtRecoveryCompany::DrcName, 255).not_null())
                    .col(string_len(DebtRecoveryCompany::DrcAbbreviation, 64).not_null())
                    .col(string_len(DebtRecoveryCompany::ContactNumber, 32).not_null())
                    .col(string_len(DebtRecoveryCompany::DrcStatus, 16).not_null())
                    .col(timestamp_null(DebtRecoveryCompany::DrcEndDate))
                    .col(string_len(DebtRecoveryCompany::CreatedBy, 64).not_null())
                    .col(timestamp(DebtRecoveryCompany::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DebtRecoveryCompany::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DebtRecoveryCompany {
    Table,
    DrcId,
    DrcName,
    DrcAbbreviation,
    ContactNumber,
    DrcStatus,
    DrcEndDate,
    CreatedBy,
    CreatedAt,
}
