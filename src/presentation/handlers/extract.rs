use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::PageExtractor;
use crate::domain::Document;
use crate::presentation::state::AppState;

pub const NO_FILE_UPLOADED: &str = "No file uploaded";

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

struct Upload {
    filename: String,
    data: Bytes,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Finds the `file` part. Only parts carrying a filename count as uploads;
/// a plain form value named `file` is skipped like any other field.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<Upload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            tracing::debug!(field = ?field.name(), "Ignoring multipart field");
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_owned) else {
            tracing::debug!("Ignoring `file` form value without a filename");
            continue;
        };
        let data = field.bytes().await?;

        return Ok(Some(Upload { filename, data }));
    }

    Ok(None)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_pdf_handler<E>(
    State(state): State<AppState<E>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    E: PageExtractor + ?Sized + 'static,
{
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(
                reason = %rejection.body_text(),
                "Extract request without multipart body"
            );
            return error_response(StatusCode::BAD_REQUEST, NO_FILE_UPLOADED);
        }
    };

    let upload = match read_file_field(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            tracing::warn!("Extract request with no file");
            return error_response(StatusCode::BAD_REQUEST, NO_FILE_UPLOADED);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(e.status(), e.body_text());
        }
    };

    let document = Document::new(Some(&upload.filename), upload.data.len() as u64);

    match state
        .extraction_service
        .extract(&document, &upload.data)
        .await
    {
        Ok(text) => (
            StatusCode::OK,
            Json(ExtractResponse {
                text: text.into_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(
                error = %e,
                document_id = %document.id.as_uuid(),
                "PDF text extraction failed"
            );
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
