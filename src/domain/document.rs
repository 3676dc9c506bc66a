use uuid::Uuid;

/// Filename used when an upload carries no usable name.
pub const DEFAULT_FILENAME: &str = "upload.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// A single uploaded file, identified for the lifetime of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: Option<&str>, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename: sanitize_filename(filename),
            size_bytes,
        }
    }
}

/// Reduces a client supplied filename to its final path component for logging.
///
/// Both `/` and `\` count as separators, so a Windows style path from a browser
/// is reduced the same way.
pub fn sanitize_filename(raw: Option<&str>) -> String {
    let candidate = raw
        .and_then(|name| name.rsplit(['/', '\\']).next())
        .map(str::trim)
        .unwrap_or_default();

    match candidate {
        "" | "." | ".." => DEFAULT_FILENAME.to_string(),
        name if name.contains('\0') => DEFAULT_FILENAME.to_string(),
        name => name.to_string(),
    }
}
