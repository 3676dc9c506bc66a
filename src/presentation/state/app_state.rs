use std::sync::Arc;

use crate::application::ports::PageExtractor;
use crate::application::services::ExtractionService;
use crate::presentation::config::Settings;

pub struct AppState<E>
where
    E: PageExtractor + ?Sized,
{
    pub extraction_service: Arc<ExtractionService<E>>,
    pub settings: Arc<Settings>,
}

impl<E> AppState<E>
where
    E: PageExtractor + ?Sized,
{
    pub fn new(extraction_service: Arc<ExtractionService<E>>, settings: Settings) -> Self {
        Self {
            extraction_service,
            settings: Arc::new(settings),
        }
    }
}

impl<E> Clone for AppState<E>
where
    E: PageExtractor + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            settings: Arc::clone(&self.settings),
        }
    }
}
