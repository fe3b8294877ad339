use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tracing::{error, info};

use service::storage::MongoStore;

use crate::routes;
use crate::AppState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Public entry: connect the stores, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;

    // The sequence counters live here; no registration can run without them.
    let documents = MongoStore::connect(&cfg.document_store)
        .await
        .map_err(|e| anyhow::anyhow!("document store unreachable at startup: {e}"))?;
    info!("document store connected");

    // The relational side may come up later; keep serving and degrade per
    // request until it does.
    let relational = match models::db::connect(&cfg.database).await {
        Ok(db) => {
            info!("relational store connected");
            Some(db)
        }
        Err(err) => {
            error!(error = %err, "relational connect failed; continuing with the document store only");
            None
        }
    };

    let state = AppState {
        relational,
        documents: Arc::new(documents),
    };
    let app: Router = routes::build_router(state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "drc admin api listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
