use std::sync::Arc;

use ledgerlink_api::app::{self, AppState};
use ledgerlink_store::StoreHandle;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ledgerlink_observability::init();

    let state = Arc::new(AppState::http());

    // Optional pre-binding; otherwise the invoking runtime calls /init.
    if let Ok(handle) = std::env::var("STORE_HANDLE") {
        state.bind_store(&StoreHandle::new(handle))?;
    }

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let app = app::build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
