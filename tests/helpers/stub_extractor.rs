use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Barrier;

use pdftext::application::ports::{ExtractionError, PageExtractor};
use pdftext::domain::PageText;

const STUB_HEADER: &str = "%STUB\n";
const PAGE_BREAK: &str = "\u{c}";

/// Bytes the stub extractor reads back as the given pages.
pub fn stub_document(pages: &[&str]) -> Vec<u8> {
    format!("{STUB_HEADER}{}", pages.join(PAGE_BREAK)).into_bytes()
}

/// Reads files written by [`stub_document`]; anything else is treated as corrupt.
#[derive(Default)]
pub struct StubExtractor {
    barrier: Option<Barrier>,
    seen: Mutex<Vec<PathBuf>>,
}

impl StubExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds every call until `parties` calls are in flight at once.
    pub fn rendezvous(parties: usize) -> Self {
        Self {
            barrier: Some(Barrier::new(parties)),
            seen: Mutex::default(),
        }
    }

    pub fn seen_paths(&self) -> Vec<PathBuf> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageExtractor for StubExtractor {
    async fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, ExtractionError> {
        assert!(path.exists(), "staged file missing: {}", path.display());
        self.seen.lock().unwrap().push(path.to_path_buf());

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| ExtractionError::Parse(e.to_string()))?;

        let body = std::str::from_utf8(&data)
            .ok()
            .and_then(|s| s.strip_prefix(STUB_HEADER))
            .ok_or_else(|| ExtractionError::Parse("invalid header".to_string()))?;

        Ok(body
            .split(PAGE_BREAK)
            .enumerate()
            .map(|(i, text)| PageText::new(i as u32 + 1, text))
            .collect())
    }
}

/// Fails on a given page, after the earlier ones succeeded.
pub struct FailingPageExtractor {
    pub fail_on_page: u32,
}

#[async_trait]
impl PageExtractor for FailingPageExtractor {
    async fn extract_pages(&self, _path: &Path) -> Result<Vec<PageText>, ExtractionError> {
        let mut pages = Vec::new();
        for page in 1..=self.fail_on_page {
            if page == self.fail_on_page {
                return Err(ExtractionError::Page {
                    page,
                    message: "unsupported font encoding".to_string(),
                });
            }
            pages.push(PageText::new(page, format!("page {page}")));
        }
        Ok(pages)
    }
}
