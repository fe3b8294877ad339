//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20241121_000001_create_debt_recovery_company;
mod m20241121_000002_create_service_type;
mod m20241121_000003_create_company_owned_services;
mod m20241121_000004_create_rtom;
mod m20241121_000005_create_recovery_officer;
mod m20241121_000006_create_recovery_officer_rtoms;
mod m20241121_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241121_000001_create_debt_recovery_company::Migration),
            Box::new(m20241121_000002_create_service_type::Migration),
            Box::new(m20241121_000003_create_company_owned_services::Migration),
            Box::new(m20241121_000004_create_rtom::Migration),
            Box::new(m20241121_000005_create_recovery_officer::Migration),
            Box::new(m20241121_000006_create_recovery_officer_rtoms::Migration),
            // Indexes should always be applied last
            Box::new(m20241121_000007_add_indexes::Migration),
        ]
    }
}
