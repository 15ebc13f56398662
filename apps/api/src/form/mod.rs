// Form Collector: the editable working copy of the resume and the HTTP
// handlers a browser form calls on every edit.

pub mod collector;
pub mod handlers;

use thiserror::Error;

pub use collector::{FormCollector, SnapshotSink};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("experience index {index} is out of bounds (len {len})")]
    ExperienceIndexOutOfBounds { index: usize, len: usize },

    #[error("unknown field '{0}'")]
    UnknownField(String),
}
