//! Router-level flows against an in-memory document store and a mocked
//! relational connection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::{json, Value};
use tower::ServiceExt;

use models::docs::{DrcDocument, RecoveryOfficerDocument, ServiceDocument};
use models::service_type;
use models::status::RecordStatus;
use server::routes::build_router;
use server::AppState;
use service::storage::{DocumentStore, Result as StorageResult, StorageError};

/// Counting in-memory store; `fail_reads` turns every read into an error so
/// tests can watch the merge degrade.
#[derive(Default)]
struct FakeStore {
    counters: Mutex<HashMap<String, i64>>,
    services: Mutex<Vec<ServiceDocument>>,
    fail_reads: bool,
    calls: AtomicU32,
}

impl FakeStore {
    fn failing_reads() -> Self {
        Self { fail_reads: true, ..Self::default() }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn read_guard(&self) -> StorageResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(StorageError::Backend("fake outage".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn next_sequence(&self, counter: &str) -> StorageResult<i64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut counters = self.counters.lock().unwrap();
        let seq = counters.entry(counter.to_string()).or_insert(0);
        *seq += 1;
        Ok(*seq)
    }

    async fn insert_drc(&self, _doc: DrcDocument) -> StorageResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn update_drc_status(
        &self,
        _drc_id: i64,
        _status: RecordStatus,
    ) -> StorageResult<Option<DrcDocument>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }

    async fn list_drcs(&self) -> StorageResult<Vec<DrcDocument>> {
        self.read_guard()?;
        Ok(vec![])
    }

    async fn find_drc(&self, _drc_id: i64) -> StorageResult<Option<DrcDocument>> {
        self.read_guard()?;
        Ok(None)
    }

    async fn insert_service(&self, doc: ServiceDocument) -> StorageResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.services.lock().unwrap().push(doc);
        Ok(())
    }

    async fn update_service_status(
        &self,
        service_id: i64,
        status: RecordStatus,
    ) -> StorageResult<Option<ServiceDocument>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut services = self.services.lock().unwrap();
        match services.iter_mut().find(|s| s.service_id == service_id) {
            Some(doc) => {
                doc.service_status = status;
                Ok(Some(doc.clone()))
            }
            None => Ok(None),
        }
    }

    async fn list_services(&self) -> StorageResult<Vec<ServiceDocument>> {
        self.read_guard()?;
        Ok(self.services.lock().unwrap().clone())
    }

    async fn find_service(&self, service_id: i64) -> StorageResult<Option<ServiceDocument>> {
        self.read_guard()?;
        Ok(self
            .services
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.service_id == service_id)
            .cloned())
    }

    async fn list_recovery_officers(&self) -> StorageResult<Vec<RecoveryOfficerDocument>> {
        self.read_guard()?;
        Ok(vec![])
    }

    async fn update_ro_status(&self, _ro_id: i64, _status: RecordStatus) -> StorageResult<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }
}

fn app(db: DatabaseConnection, store: Arc<FakeStore>) -> Router {
    build_router(AppState { relational: Some(db), documents: store })
}

async fn call(router: Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder().method(method).uri(path).body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

#[tokio::test]
async fn register_service_type_assigns_the_first_counter_value() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
        .into_connection();
    let store = Arc::new(FakeStore::default());

    let (status, body) = call(
        app(db, store.clone()),
        Method::POST,
        "/service/Register_Service_Type",
        Some(json!({ "service_type": "Internet" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Service data stored successfully");
    assert_eq!(body["service"]["service_id"], 1);
    assert_eq!(body["service"]["service_type"], "Internet");
    assert_eq!(body["service"]["service_status"], "Active");
}

#[tokio::test]
async fn register_drc_with_missing_fields_touches_no_store() {
    let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();
    let store = Arc::new(FakeStore::default());

    let (status, body) = call(
        app(db, store.clone()),
        Method::POST,
        "/DRC/Register_DRC",
        Some(json!({ "DRC_Name": "CMS Collections" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["field_name"], "All fields are required");
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn service_listing_degrades_to_relational_when_documents_fail() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![service_type::Model {
            service_id: 1,
            service_type: "Internet".to_string(),
            service_status: RecordStatus::Active,
        }]])
        .into_connection();
    let store = Arc::new(FakeStore::failing_reads());

    let (status, body) = call(
        app(db, store),
        Method::GET,
        "/service/Service_Details",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["relational"][0]["service_id"], 1);
    assert!(body["data"]["document"].is_null());
}

#[tokio::test]
async fn service_listing_is_500_when_both_sides_come_back_empty() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<service_type::Model>::new()])
        .into_connection();
    let store = Arc::new(FakeStore::default());

    let (status, body) = call(
        app(db, store),
        Method::GET,
        "/service/Service_Details",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["errors"]["code"], 500);
}

#[tokio::test]
async fn service_lookup_is_404_when_both_sides_miss() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<service_type::Model>::new()])
        .into_connection();
    let store = Arc::new(FakeStore::default());

    let (status, body) = call(
        app(db, store),
        Method::POST,
        "/service/Service_Details_By_Id",
        Some(json!({ "service_id": 9 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"]["description"], "No service found with service_id: 9.");
}

#[tokio::test]
async fn change_service_status_404_names_mongodb_when_only_the_document_misses() {
    // Relational update hits a row, the fake store holds no matching copy.
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
        .into_connection();
    let store = Arc::new(FakeStore::default());

    let (status, body) = call(
        app(db, store),
        Method::PATCH,
        "/service/Change_Service_Status",
        Some(json!({ "service_id": 5, "service_status": "Inactive" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Failed to update the service status in MongoDB.");
    assert_eq!(body["errors"]["description"], "Service not found in MongoDB for the given service_id.");
}

#[tokio::test]
async fn unknown_sequence_collection_answers_the_sentinel() {
    let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();
    let store = Arc::new(FakeStore::default());

    let (status, body) = call(
        app(db, store),
        Method::POST,
        "/sequence/Document_Sequence",
        Some(json!({ "collection_name": "Incidents" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "not found");
    assert_eq!(body["data"]["sequence"], -1);
}

#[tokio::test]
async fn health_answers_ok() {
    let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();
    let store = Arc::new(FakeStore::default());

    let (status, body) = call(app(db, store), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
