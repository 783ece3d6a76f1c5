use axum::{
    Router,
    routing::post,
    Json,
    body::Bytes,
    extract::{Multipart, State},
};
use crate::db::BookStore;
use crate::extract;
use crate::models::{AppState, UploadResponse};
use crate::types::{AppError, AppResult};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/upload", post(upload_pdf))
        .with_state(state)
}

/// Ingest one uploaded PDF: validate the filename, extract its text and
/// persist it. Nothing is written on any failure path.
async fn upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let Some((filename, data)) = read_file_field(&mut multipart).await? else {
        return Err(AppError::InvalidRequest("No file provided".to_string()));
    };

    if !is_pdf_filename(&filename) {
        return Err(AppError::InvalidRequest("File must be a PDF".to_string()));
    }

    info!(filename = %filename, bytes = data.len(), "Processing upload");

    let text = extract::extract_text(&data);
    if text.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Could not extract text from PDF".to_string(),
        ));
    }

    let book = BookStore::create(&state.pool, &filename, &text).await?;

    info!(id = book.id, filename = %book.filename, "Book ingested");

    Ok(Json(UploadResponse {
        id: book.id,
        filename: book.filename,
        status: "processed".to_string(),
    }))
}

/// Suffix check only, case-sensitive. No content-type or magic-byte
/// verification.
fn is_pdf_filename(name: &str) -> bool {
    name.ends_with(".pdf")
}

/// Read the first multipart field that carries a filename (the client sends
/// the upload under the `file` field; fields without filenames are skipped).
async fn read_file_field(multipart: &mut Multipart) -> AppResult<Option<(String, Bytes)>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Failed to read upload: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("Failed to read file: {}", e)))?;

        return Ok(Some((filename, data)));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_suffix() {
        assert!(is_pdf_filename("book.pdf"));
        assert!(is_pdf_filename("my.notes.pdf"));
    }

    #[test]
    fn rejects_other_suffixes() {
        assert!(!is_pdf_filename("book.txt"));
        assert!(!is_pdf_filename("book.pdf.exe"));
        assert!(!is_pdf_filename("book"));
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        assert!(!is_pdf_filename("book.PDF"));
        assert!(!is_pdf_filename("book.Pdf"));
    }
}
