use std::path::Path;

use async_trait::async_trait;

use crate::domain::PageText;

/// Turns a stored document into its per-page text, in page order.
#[async_trait]
pub trait PageExtractor: Send + Sync {
    async fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("failed to parse PDF: {0}")]
    Parse(String),
    #[error("failed to extract text from page {page}: {message}")]
    Page { page: u32, message: String },
    #[error("extraction task aborted: {0}")]
    Aborted(String),
}
