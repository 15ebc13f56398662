pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::export::handlers as export;
use crate::form::handlers as form;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form Collector
        .route("/api/v1/form", get(form::handle_get_form))
        .route("/api/v1/form/fields/:field", put(form::handle_set_field))
        .route(
            "/api/v1/form/experience",
            post(form::handle_add_experience),
        )
        .route(
            "/api/v1/form/experience/:index",
            delete(form::handle_remove_experience),
        )
        .route(
            "/api/v1/form/experience/:index/:field",
            put(form::handle_set_experience_field),
        )
        .route("/api/v1/form/submit", post(form::handle_submit))
        // Preview / export of the submitted snapshot
        .route("/api/v1/resume", get(export::handle_get_resume))
        .route("/api/v1/resume/preview", get(export::handle_preview))
        .route(
            "/api/v1/resume/preview.txt",
            get(export::handle_preview_text),
        )
        .route("/api/v1/resume/export/pdf", get(export::handle_export_pdf))
        .route(
            "/api/v1/resume/export/html",
            get(export::handle_export_html),
        )
        .with_state(state)
}
