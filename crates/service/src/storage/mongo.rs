//! MongoDB implementation of [`DocumentStore`].

use async_trait::async_trait;
use mongodb::bson::{doc, Bson};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, IndexModel};

use configs::DocumentStoreConfig;
use models::docs::{
    CounterDocument, DrcDocument, RecoveryOfficerDocument, ServiceDocument, COUNTERS_COLLECTION,
    DRC_COLLECTION, RECOVERY_OFFICER_COLLECTION, SERVICES_COLLECTION,
};
use models::status::RecordStatus;

use super::{DocumentStore, Result, StorageError};

pub struct MongoStore {
    drcs: Collection<DrcDocument>,
    services: Collection<ServiceDocument>,
    recovery_officers: Collection<RecoveryOfficerDocument>,
    counters: Collection<CounterDocument>,
}

impl MongoStore {
    /// Connect and ping before serving. Registration cannot run without the
    /// counters collection, so callers treat a failure here as fatal.
    pub async fn connect(cfg: &DocumentStoreConfig) -> Result<Self> {
        let client = Client::with_uri_str(&cfg.uri).await?;
        let database = client.database(&cfg.database);
        database.run_command(doc! { "ping": 1 }).await?;

        let store = Self {
            drcs: database.collection(DRC_COLLECTION),
            services: database.collection(SERVICES_COLLECTION),
            recovery_officers: database.collection(RECOVERY_OFFICER_COLLECTION),
            counters: database.collection(COUNTERS_COLLECTION),
        };
        store.init().await?;

        Ok(store)
    }

    /// Unique indexes on the logical ids, mirroring the relational keys.
    async fn init(&self) -> Result<()> {
        let unique = IndexOptions::builder().unique(true).build();

        self.drcs
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "drc_id": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await?;

        self.services
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "service_id": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await?;

        self.recovery_officers
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "ro_id": 1 })
                    .options(unique)
                    .build(),
            )
            .await?;

        Ok(())
    }

    fn status_bson(status: RecordStatus) -> Result<Bson> {
        mongodb::bson::to_bson(&status).map_err(|e| StorageError::Backend(e.to_string()))
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn next_sequence(&self, counter: &str) -> Result<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .counters
            .find_one_and_update(doc! { "_id": counter }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await?;

        match updated {
            Some(c) => Ok(c.seq),
            None => Err(StorageError::CounterMissing(counter.to_string())),
        }
    }

    async fn insert_drc(&self, doc: DrcDocument) -> Result<()> {
        self.drcs.insert_one(doc).await?;
        Ok(())
    }

    async fn update_drc_status(&self, drc_id: i64, status: RecordStatus) -> Result<Option<DrcDocument>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .drcs
            .find_one_and_update(
                doc! { "drc_id": drc_id },
                doc! { "$set": { "drc_status": Self::status_bson(status)? } },
            )
            .with_options(options)
            .await?;
        Ok(updated)
    }

    async fn list_drcs(&self) -> Result<Vec<DrcDocument>> {
        let mut cursor = self.drcs.find(doc! {}).await?;
        let mut out = Vec::new();
        while cursor.advance().await? {
            out.push(cursor.deserialize_current()?);
        }
        Ok(out)
    }

    async fn find_drc(&self, drc_id: i64) -> Result<Option<DrcDocument>> {
        Ok(self.drcs.find_one(doc! { "drc_id": drc_id }).await?)
    }

    async fn insert_service(&self, doc: ServiceDocument) -> Result<()> {
        self.services.insert_one(doc).await?;
        Ok(())
    }

    async fn update_service_status(
        &self,
        service_id: i64,
        status: RecordStatus,
    ) -> Result<Option<ServiceDocument>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .services
            .find_one_and_update(
                doc! { "service_id": service_id },
                doc! { "$set": { "service_status": Self::status_bson(status)? } },
            )
            .with_options(options)
            .await?;
        Ok(updated)
    }

    async fn list_services(&self) -> Result<Vec<ServiceDocument>> {
        let mut cursor = self.services.find(doc! {}).await?;
        let mut out = Vec::new();
        while cursor.advance().await? {
            out.push(cursor.deserialize_current()?);
        }
        Ok(out)
    }

    async fn find_service(&self, service_id: i64) -> Result<Option<ServiceDocument>> {
        Ok(self.services.find_one(doc! { "service_id": service_id }).await?)
    }

    async fn list_recovery_officers(&self) -> Result<Vec<RecoveryOfficerDocument>> {
        let mut cursor = self.recovery_officers.find(doc! {}).await?;
        let mut out = Vec::new();
        while cursor.advance().await? {
            out.push(cursor.deserialize_current()?);
        }
        Ok(out)
    }

    async fn update_ro_status(&self, ro_id: i64, status: RecordStatus) -> Result<u64> {
        let result = self
            .recovery_officers
            .update_one(
                doc! { "ro_id": ro_id },
                doc! { "$set": { "ro_status": Self::status_bson(status)? } },
            )
            .await?;
        Ok(result.matched_count)
    }
}
