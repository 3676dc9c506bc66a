mod extract;
mod health;

pub use extract::{ErrorResponse, ExtractResponse, NO_FILE_UPLOADED, extract_pdf_handler};
pub use health::{HealthResponse, health_handler};
