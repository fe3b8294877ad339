//! Create `recovery_officer_rtoms`, the RO↔RTOM assignment table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecoveryOfficerRtoms::Table)
                    .if_not_exists()
                    .col(big_integer(RecoveryOfficerRtoms::Id).auto_increment().primary_key())
                    .col(big_integer(RecoveryOfficerRtoms::RoId).not_null())
                    .col(big_integer(RecoveryOfficerRtoms::RtomId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecoveryOfficerRtoms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RecoveryOfficerRtoms {
    Table,
    Id,
    RoId,
    RtomId,
}
