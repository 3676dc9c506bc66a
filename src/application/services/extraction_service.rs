use std::sync::Arc;

use crate::application::ports::{ExtractionError, PageExtractor, StagingError};
use crate::domain::{Document, ExtractedText};
use crate::infrastructure::storage::ScratchStore;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionServiceError {
    #[error(transparent)]
    Staging(#[from] StagingError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Stages an upload in its own transient directory, runs the extractor on it
/// and assembles the page texts.
pub struct ExtractionService<E: ?Sized> {
    extractor: Arc<E>,
    scratch: ScratchStore,
}

impl<E> ExtractionService<E>
where
    E: PageExtractor + ?Sized,
{
    pub fn new(extractor: Arc<E>, scratch: ScratchStore) -> Self {
        Self { extractor, scratch }
    }

    pub fn scratch(&self) -> &ScratchStore {
        &self.scratch
    }

    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            bytes = document.size_bytes,
        )
    )]
    pub async fn extract(
        &self,
        document: &Document,
        data: &[u8],
    ) -> Result<ExtractedText, ExtractionServiceError> {
        let staged = self.scratch.stage(document, data).await?;

        let pages = self.extractor.extract_pages(staged.path()).await;

        // Released before the result is inspected so both exit paths reclaim it.
        staged.release();

        let text = ExtractedText::from_pages(pages?);
        tracing::info!(
            page_count = text.page_count(),
            chars = text.as_str().len(),
            "PDF text extraction complete"
        );

        Ok(text)
    }
}
