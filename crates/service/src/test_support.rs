#![cfg(test)]
//! In-memory [`DocumentStore`] fake with call counting, so tests can assert
//! which store operations ran (and, for validation failures, that none did).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use models::docs::{DrcDocument, RecoveryOfficerDocument, ServiceDocument};
use models::status::RecordStatus;

use crate::storage::{DocumentStore, Result, StorageError};

#[derive(Default)]
pub struct FakeDocumentStore {
    counters: Mutex<HashMap<String, i64>>,
    pub drcs: Mutex<Vec<DrcDocument>>,
    pub services: Mutex<Vec<ServiceDocument>>,
    pub recovery_officers: Mutex<Vec<RecoveryOfficerDocument>>,
    fail_sequence: bool,
    fail_writes: bool,
    fail_reads: bool,
    sequence_calls: AtomicU32,
    write_calls: AtomicU32,
    read_calls: AtomicU32,
}

impl FakeDocumentStore {
    pub fn failing_sequence() -> Self {
        Self { fail_sequence: true, ..Self::default() }
    }

    pub fn failing_writes() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    pub fn failing_reads() -> Self {
        Self { fail_reads: true, ..Self::default() }
    }

    pub fn sequence_calls(&self) -> u32 {
        self.sequence_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> u32 {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> u32 {
        self.read_calls.load(Ordering::SeqCst)
    }

    fn record_write(&self) -> Result<()> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StorageError::Backend("fake write failure".into()));
        }
        Ok(())
    }

    fn record_read(&self) -> Result<()> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(StorageError::Backend("fake read failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FakeDocumentStore {
    async fn next_sequence(&self, counter: &str) -> Result<i64> {
        self.sequence_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_sequence {
            return Err(StorageError::CounterMissing(counter.to_string()));
        }
        let mut counters = self.counters.lock().unwrap();
        let seq = counters.entry(counter.to_string()).or_insert(0);
        *seq += 1;
        Ok(*seq)
    }

    async fn insert_drc(&self, doc: DrcDocument) -> Result<()> {
        self.record_write()?;
        self.drcs.lock().unwrap().push(doc);
        Ok(())
    }

    async fn update_drc_status(&self, drc_id: i64, status: RecordStatus) -> Result<Option<DrcDocument>> {
        self.record_write()?;
        let mut drcs = self.drcs.lock().unwrap();
        match drcs.iter_mut().find(|d| d.drc_id == drc_id) {
            Some(doc) => {
                doc.drc_status = status;
                Ok(Some(doc.clone()))
            }
            None => Ok(None),
        }
    }

    async fn list_drcs(&self) -> Result<Vec<DrcDocument>> {
        self.record_read()?;
        Ok(self.drcs.lock().unwrap().clone())
    }

    async fn find_drc(&self, drc_id: i64) -> Result<Option<DrcDocument>> {
        self.record_read()?;
        Ok(self.drcs.lock().unwrap().iter().find(|d| d.drc_id == drc_id).cloned())
    }

    async fn insert_service(&self, doc: ServiceDocument) -> Result<()> {
        self.record_write()?;
        self.services.lock().unwrap().push(doc);
        Ok(())
    }

    async fn update_service_status(
        &self,
        service_id: i64,
        status: RecordStatus,
    ) -> Result<Option<ServiceDocument>> {
        self.record_write()?;
        let mut services = self.services.lock().unwrap();
        match services.iter_mut().find(|s| s.service_id == service_id) {
            Some(doc) => {
                doc.service_status = status;
                Ok(Some(doc.clone()))
            }
            None => Ok(None),
        }
    }

    async fn list_services(&self) -> Result<Vec<ServiceDocument>> {
        self.record_read()?;
        Ok(self.services.lock().unwrap().clone())
    }

    async fn find_service(&self, service_id: i64) -> Result<Option<ServiceDocument>> {
        self.record_read()?;
        Ok(self
            .services
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.service_id == service_id)
            .cloned())
    }

    async fn list_recovery_officers(&self) -> Result<Vec<RecoveryOfficerDocument>> {
        self.record_read()?;
        Ok(self.recovery_officers.lock().unwrap().clone())
    }

    async fn update_ro_status(&self, ro_id: i64, status: RecordStatus) -> Result<u64> {
        self.record_write()?;
        let mut officers = self.recovery_officers.lock().unwrap();
        match officers.iter_mut().find(|r| r.ro_id == ro_id) {
            Some(doc) => {
                doc.ro_status = status;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
