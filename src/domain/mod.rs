mod document;
mod extracted_text;

pub use document::{DEFAULT_FILENAME, Document, DocumentId, sanitize_filename};
pub use extracted_text::{ExtractedText, PageText};
