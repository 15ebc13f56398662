//! Form Collector — owns the mutable working copy of the resume.
//!
//! Every edit the browser makes lands here. Nothing outside the collector can
//! mutate the working copy; `submit` hands out a value snapshot to the one
//! registered `SnapshotSink` and keeps editing on its own copy.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::form::FormError;
use crate::models::resume::{ExperienceEntry, ExperienceField, ResumeData, ResumeField};

// ────────────────────────────────────────────────────────────────────────────
// Snapshot consumer
// ────────────────────────────────────────────────────────────────────────────

/// Receives submitted snapshots. The collector holds exactly one.
///
/// `ResumeStore` is the production implementation; tests plug in recorders.
#[async_trait]
pub trait SnapshotSink: Send + Sync {
    async fn accept(&self, snapshot: ResumeData);
}

// ────────────────────────────────────────────────────────────────────────────
// Collector
// ────────────────────────────────────────────────────────────────────────────

pub struct FormCollector {
    working: ResumeData,
    sink: Arc<dyn SnapshotSink>,
}

impl FormCollector {
    /// Starts from `ResumeData::default()` (one empty experience entry).
    pub fn new(sink: Arc<dyn SnapshotSink>) -> Self {
        FormCollector {
            working: ResumeData::default(),
            sink,
        }
    }

    pub fn working_copy(&self) -> &ResumeData {
        &self.working
    }

    pub fn set_field(&mut self, field: ResumeField, value: String) {
        debug!(%field, "set field");
        self.working.set(field, value);
    }

    pub fn set_experience_field(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: String,
    ) -> Result<(), FormError> {
        let len = self.working.experience.len();
        let entry = self
            .working
            .experience
            .get_mut(index)
            .ok_or(FormError::ExperienceIndexOutOfBounds { index, len })?;
        debug!(index, %field, "set experience field");
        entry.set(field, value);
        Ok(())
    }

    /// Appends an all-empty entry and returns its index.
    pub fn add_experience(&mut self) -> usize {
        self.working.experience.push(ExperienceEntry::default());
        let index = self.working.experience.len() - 1;
        debug!(index, "experience added");
        index
    }

    /// Removes the entry at `index`; later entries shift left.
    ///
    /// Removing from an empty list or past the end is rejected and leaves the
    /// working copy unchanged.
    pub fn remove_experience(&mut self, index: usize) -> Result<ExperienceEntry, FormError> {
        let len = self.working.experience.len();
        if index >= len {
            return Err(FormError::ExperienceIndexOutOfBounds { index, len });
        }
        debug!(index, "experience removed");
        Ok(self.working.experience.remove(index))
    }

    /// Emits a snapshot of the working copy to the sink and returns it.
    pub async fn submit(&self) -> ResumeData {
        let snapshot = self.working.clone();
        info!(
            experience_entries = snapshot.experience.len(),
            "Submitting resume snapshot"
        );
        self.sink.accept(snapshot.clone()).await;
        snapshot
    }
}
