use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractionError, PageExtractor};
use crate::domain::PageText;

/// Page text extraction backed by `pdf_oxide`.
#[derive(Debug, Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_pages(path: &Path) -> Result<Vec<PageText>, ExtractionError> {
        let mut doc = PdfDocument::open(path).map_err(|e| ExtractionError::Parse(e.to_string()))?;

        let page_count = doc
            .page_count()
            .map_err(|e| ExtractionError::Parse(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let page_number = (page_index + 1) as u32;
            let text = doc
                .extract_text(page_index)
                .map_err(|e| ExtractionError::Page {
                    page: page_number,
                    message: e.to_string(),
                })?;

            pages.push(PageText::new(page_number, text));
        }

        Ok(pages)
    }
}

#[async_trait]
impl PageExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, ExtractionError> {
        let path: PathBuf = path.to_path_buf();

        let pages = tokio::task::spawn_blocking(move || Self::read_pages(&path))
            .await
            .map_err(|e| ExtractionError::Aborted(e.to_string()))??;

        tracing::debug!(page_count = pages.len(), "PDF pages read");

        Ok(pages)
    }
}
