//! Report download handlers.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use enrollment_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::export::ExportFormat;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

async fn export(state: &AppState, format: ExportFormat) -> AppResult<impl IntoResponse> {
    let report = ReportRepo::roster(&state.pool).await?;
    let body = format.render(&report)?;

    tracing::info!(
        format = format.extension(),
        tracks = report.len(),
        bytes = body.len(),
        "Report exported",
    );

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, format.mime_type().to_string()),
            (CONTENT_DISPOSITION, format.content_disposition()),
        ],
        body,
    ))
}

/// GET /admin/exportar/excel
pub async fn export_excel(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    export(&state, ExportFormat::Excel).await
}

/// GET /admin/exportar/pdf
pub async fn export_pdf(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    export(&state, ExportFormat::Pdf).await
}
