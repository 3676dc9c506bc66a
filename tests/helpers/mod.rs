#![allow(dead_code)]

pub mod multipart;
pub mod stub_extractor;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Response;
use config::Config;

use pdftext::application::ports::PageExtractor;
use pdftext::application::services::ExtractionService;
use pdftext::infrastructure::storage::ScratchStore;
use pdftext::presentation::{AppState, Settings, create_router};

pub fn test_settings() -> Settings {
    Settings::from_builder(Config::builder()).unwrap()
}

pub fn create_test_app<E>(extractor: Arc<E>, scratch_root: &Path) -> Router
where
    E: PageExtractor + 'static,
{
    create_test_app_with_settings(extractor, scratch_root, test_settings())
}

pub fn create_test_app_with_settings<E>(
    extractor: Arc<E>,
    scratch_root: &Path,
    settings: Settings,
) -> Router
where
    E: PageExtractor + 'static,
{
    let scratch = ScratchStore::new(scratch_root.to_path_buf()).unwrap();
    let service = Arc::new(ExtractionService::new(extractor, scratch));
    create_router(AppState::new(service, settings))
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub fn entries_in(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
