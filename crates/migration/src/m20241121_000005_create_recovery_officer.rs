//! Create `recovery_officer` table.
//!
//! `drc_id` is a logical reference only; the live system never declared the
//! foreign key and the document-store copy cannot share one anyway.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecoveryOfficer::Table)
                    .if_not_exists()
                    .col(big_integer(RecoveryOfficer::RoId).primary_key())
                    .col(string_len(RecoveryOfficer::RoName, 255).not_null())
                    .col(string_len(RecoveryOfficer::ContactNumber, 32).not_null())
                    .col(big_integer(RecoveryOfficer::DrcId).not_null())
                    .col(string_len(RecoveryOfficer::RoStatus, 16).not_null())
                    .col(string_len(RecoveryOfficer::LoginType, 32).not_null())
                    .col(string_len(RecoveryOfficer::LoginUserId, 64).not_null())
                    .col(string_null(RecoveryOfficer::Remark))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecoveryOfficer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RecoveryOfficer {
    Table,
    RoId,
    RoName,
    ContactNumber,
    DrcId,
    RoStatus,
    LoginType,
    LoginUserId,
    Remark,
}
