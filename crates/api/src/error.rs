use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use enrollment_core::error::CoreError;

use crate::export::ExportError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce a small HTML error page. Form
/// actions do not return this type for expected failures; they redirect with
/// a flash message instead (see [`crate::middleware::flash`]).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `enrollment_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// A report export failed to build.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message shown for any server-side fault; details only go to the log.
const INTERNAL_MESSAGE: &str = "Erro interno no servidor.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Rendering / export errors ---
            AppError::Template(err) => {
                tracing::error!(error = ?err, "Template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            AppError::Export(err) => {
                tracing::error!(error = %err, "Report export failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        (status, Html(error_page(status, &message))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations (code 23503) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Registro não encontrado.".to_string()),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
            tracing::warn!(error = %db_err, "Foreign key violation");
            (
                StatusCode::CONFLICT,
                "Referência a um registro inexistente.".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}

/// Minimal standalone page so errors render even if templates are broken.
fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\">\
         <title>Erro {code}</title></head><body><h1>Erro {code}</h1><p>{msg}</p>\
         <a href=\"/\">Voltar ao portal</a></body></html>",
        code = status.as_u16(),
        msg = tera::escape_html(message),
    )
}
