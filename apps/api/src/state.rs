use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::form::FormCollector;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Working copy the browser edits. Only the form handlers touch it.
    pub form: Arc<Mutex<FormCollector>>,
    /// Last submitted snapshot; read by preview and export handlers.
    pub resume: Arc<ResumeStore>,
}

impl AppState {
    /// Wires a fresh collector to a fresh store: submissions land in `resume`.
    pub fn new(config: Config) -> Self {
        let resume = Arc::new(ResumeStore::new());
        let form = FormCollector::new(resume.clone());
        AppState {
            config,
            form: Arc::new(Mutex::new(form)),
            resume,
        }
    }
}
