mod page_extractor;
mod staging_error;

pub use page_extractor::{ExtractionError, PageExtractor};
pub use staging_error::StagingError;
