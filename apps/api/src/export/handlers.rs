use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::export::{export_html, export_pdf, ExportArtifact, HtmlEscaping, PdfLayoutMode};
use crate::models::resume::ResumeData;
use crate::preview::{render_preview, ResumePreview};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PdfExportQuery {
    pub layout: Option<PdfLayoutMode>,
}

#[derive(Deserialize)]
pub struct HtmlExportQuery {
    pub escape: Option<bool>,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeData> {
    Json(state.resume.current().await)
}

/// GET /api/v1/resume/preview
pub async fn handle_preview(State(state): State<AppState>) -> Json<ResumePreview> {
    Json(render_preview(&state.resume.current().await))
}

/// GET /api/v1/resume/preview.txt
pub async fn handle_preview_text(State(state): State<AppState>) -> String {
    render_preview(&state.resume.current().await).to_string()
}

/// GET /api/v1/resume/export/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Query(params): Query<PdfExportQuery>,
) -> Result<ExportArtifact, AppError> {
    let snapshot = state.resume.current().await;
    let mode = params.layout.unwrap_or(state.config.pdf_layout);

    // CPU-bound: keep the async executor free.
    let artifact = tokio::task::spawn_blocking(move || export_pdf(&snapshot, mode))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF export: {e}")))??;

    tracing::info!(filename = %artifact.filename, %mode, "PDF export served");
    Ok(artifact)
}

/// GET /api/v1/resume/export/html
pub async fn handle_export_html(
    State(state): State<AppState>,
    Query(params): Query<HtmlExportQuery>,
) -> ExportArtifact {
    let snapshot = state.resume.current().await;
    let escaping = params
        .escape
        .map(HtmlEscaping::from_flag)
        .unwrap_or(state.config.html_escaping);

    let artifact = export_html(&snapshot, escaping);
    tracing::info!(filename = %artifact.filename, ?escaping, "HTML export served");
    artifact
}
