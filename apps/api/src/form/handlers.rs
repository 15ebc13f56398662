use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::{ExperienceField, ResumeData, ResumeField};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FieldValue {
    pub value: String,
}

/// GET /api/v1/form
pub async fn handle_get_form(State(state): State<AppState>) -> Json<ResumeData> {
    Json(state.form.lock().await.working_copy().clone())
}

/// PUT /api/v1/form/fields/:field
pub async fn handle_set_field(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Json(req): Json<FieldValue>,
) -> Result<Json<ResumeData>, AppError> {
    let field: ResumeField = field.parse()?;
    let mut form = state.form.lock().await;
    form.set_field(field, req.value);
    Ok(Json(form.working_copy().clone()))
}

/// POST /api/v1/form/experience
pub async fn handle_add_experience(State(state): State<AppState>) -> Json<ResumeData> {
    let mut form = state.form.lock().await;
    form.add_experience();
    Json(form.working_copy().clone())
}

/// PUT /api/v1/form/experience/:index/:field
pub async fn handle_set_experience_field(
    State(state): State<AppState>,
    Path((index, field)): Path<(usize, String)>,
    Json(req): Json<FieldValue>,
) -> Result<Json<ResumeData>, AppError> {
    let field: ExperienceField = field.parse()?;
    let mut form = state.form.lock().await;
    form.set_experience_field(index, field, req.value)?;
    Ok(Json(form.working_copy().clone()))
}

/// DELETE /api/v1/form/experience/:index
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ResumeData>, AppError> {
    let mut form = state.form.lock().await;
    form.remove_experience(index)?;
    Ok(Json(form.working_copy().clone()))
}

/// POST /api/v1/form/submit
pub async fn handle_submit(State(state): State<AppState>) -> Json<ResumeData> {
    let form = state.form.lock().await;
    Json(form.submit().await)
}
