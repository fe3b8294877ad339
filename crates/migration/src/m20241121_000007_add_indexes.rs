use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Assignments: lookups are always by company, sometimes by service
        manager
            .create_index(
                Index::create()
                    .name("idx_cos_drc")
                    .table(CompanyOwnedServices::Table)
                    .col(CompanyOwnedServices::DrcId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cos_service")
                    .table(CompanyOwnedServices::Table)
                    .col(CompanyOwnedServices::ServiceId)
                    .to_owned(),
            )
            .await?;

        // Recovery officers: listed per company
        manager
            .create_index(
                Index::create()
                    .name("idx_ro_drc")
                    .table(RecoveryOfficer::Table)
                    .col(RecoveryOfficer::DrcId)
                    .to_owned(),
            )
            .await?;

        // RO↔RTOM rows: grouped by officer when denormalizing the listing
        manager
            .create_index(
                Index::create()
                    .name("idx_ro_rtoms_ro")
                    .table(RecoveryOfficerRtoms::Table)
                    .col(RecoveryOfficerRtoms::RoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ro_rtoms_rtom")
                    .table(RecoveryOfficerRtoms::Table)
                    .col(RecoveryOfficerRtoms::RtomId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_cos_drc").table(CompanyOwnedServices::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_cos_service").table(CompanyOwnedServices::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ro_drc").table(RecoveryOfficer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ro_rtoms_ro").table(RecoveryOfficerRtoms::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ro_rtoms_rtom").table(RecoveryOfficerRtoms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyOwnedServices {
    Table,
    DrcId,
    ServiceId,
}

#[derive(DeriveIden)]
enum RecoveryOfficer {
    Table,
    DrcId,
}

#[derive(DeriveIden)]
enum RecoveryOfficerRtoms {
    Table,
    RoId,
    RtomId,
}
