// Preview/Exporter artifacts: a fixed or flowing PDF, and a self-contained
// HTML page. PDF rendering is CPU-bound; handlers run it under spawn_blocking.

pub mod artifact;
pub mod font_metrics;
pub mod handlers;
pub mod html;
pub mod layout;
pub mod pdf;

use thiserror::Error;

pub use artifact::ExportArtifact;
pub use html::{export_html, HtmlEscaping};
pub use layout::PdfLayoutMode;
pub use pdf::export_pdf;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}
