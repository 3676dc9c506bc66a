use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use pdftext::application::services::ExtractionService;
use pdftext::infrastructure::observability::init_tracing;
use pdftext::infrastructure::storage::ScratchStore;
use pdftext::infrastructure::text_processing::PdfAdapter;
use pdftext::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&settings.logging, environment);

    let scratch = ScratchStore::from_settings(&settings.storage)
        .context("Failed to prepare scratch directory")?;
    tracing::info!(root = %scratch.root().display(), "Scratch storage ready");

    let extractor = Arc::new(PdfAdapter::new());
    let extraction_service = Arc::new(ExtractionService::new(extractor, scratch));

    let addr = settings.server.bind_address();
    let max_upload_mb = settings.upload.max_file_size_mb;
    let state = AppState::new(extraction_service, settings);
    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, max_upload_mb, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
