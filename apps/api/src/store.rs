use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::form::SnapshotSink;
use crate::models::resume::ResumeData;

/// Holds the most recently submitted resume snapshot.
///
/// The only way to change the held value is `SnapshotSink::accept`, which
/// replaces it wholesale. Readers get a clone and never see later edits.
#[derive(Debug, Default)]
pub struct ResumeStore {
    current: RwLock<ResumeData>,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> ResumeData {
        self.current.read().await.clone()
    }
}

#[async_trait]
impl SnapshotSink for ResumeStore {
    async fn accept(&self, snapshot: ResumeData) {
        info!(name = %snapshot.name, "Resume snapshot replaced");
        *self.current.write().await = snapshot;
    }
}
