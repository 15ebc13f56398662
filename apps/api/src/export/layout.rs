//! PDF page layout.
//!
//! Two modes place the same text in the same order:
//!
//! - `Fixed` puts every line at a hard-coded vertical offset. Experience lines
//!   move down linearly with the entry index and education follows at a
//!   constant distance after them. Long values or many entries overlap or run
//!   off the bottom of the single page; that is left as is.
//! - `Flowing` word-wraps each value to the text width, advances by line
//!   height and starts a new page at the bottom margin.
//!
//! All coordinates are millimetres from the top-left corner; y is the baseline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::export::font_metrics::{FontMetricTable, HELVETICA, PT_TO_MM};
use crate::models::resume::ResumeData;

pub const TITLE_FONT_SIZE_PT: f32 = 18.0;
pub const BODY_FONT_SIZE_PT: f32 = 14.0;
/// Baseline-to-baseline distance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

const LEFT_X_MM: f32 = 20.0;
/// Vertical distance between consecutive experience entries in `Fixed` mode.
const FIXED_ENTRY_STEP_MM: f32 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdfLayoutMode {
    #[default]
    Fixed,
    Flowing,
}

impl FromStr for PdfLayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(PdfLayoutMode::Fixed),
            "flowing" => Ok(PdfLayoutMode::Flowing),
            other => Err(format!("unknown PDF layout '{other}' (expected fixed|flowing)")),
        }
    }
}

impl fmt::Display for PdfLayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfLayoutMode::Fixed => f.write_str("fixed"),
            PdfLayoutMode::Flowing => f.write_str("flowing"),
        }
    }
}

/// A4 portrait with 20mm margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
    pub margin_top_mm: f32,
    pub margin_bottom_mm: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_left_mm: LEFT_X_MM,
            margin_right_mm: 20.0,
            margin_top_mm: 20.0,
            margin_bottom_mm: 20.0,
        }
    }
}

impl PageGeometry {
    pub fn text_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Lowest baseline the flowing layout will place on a page.
    pub fn bottom_limit_mm(&self) -> f32 {
        self.height_mm - self.margin_bottom_mm
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x_mm: f32,
    pub y_mm: f32,
    pub font_size_pt: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub items: Vec<PlacedText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<LaidOutPage>,
}

impl LaidOutDocument {
    pub fn all_items(&self) -> impl Iterator<Item = &PlacedText> {
        self.pages.iter().flat_map(|p| p.items.iter())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content blocks (shared by both modes)
// ────────────────────────────────────────────────────────────────────────────

/// One logical line of resume text with its `Fixed` baseline.
#[derive(Debug, Clone)]
struct Block {
    font_size_pt: f32,
    text: String,
    fixed_y_mm: f32,
    /// Extra space the flowing layout leaves above a section heading.
    starts_section: bool,
}

fn block(font_size_pt: f32, text: String, fixed_y_mm: f32, starts_section: bool) -> Block {
    Block {
        font_size_pt,
        text,
        fixed_y_mm,
        starts_section,
    }
}

fn resume_blocks(snapshot: &ResumeData) -> Vec<Block> {
    let body = BODY_FONT_SIZE_PT;
    let mut blocks = vec![
        block(TITLE_FONT_SIZE_PT, "Resume".to_string(), 20.0, false),
        block(body, format!("Name: {}", snapshot.name), 30.0, false),
        block(body, format!("Email: {}", snapshot.email), 40.0, false),
        block(body, format!("Phone: {}", snapshot.phone), 50.0, false),
        block(body, "Skills:".to_string(), 60.0, true),
        block(body, snapshot.skills.clone(), 70.0, false),
        block(body, "Experience:".to_string(), 100.0, true),
    ];

    for (idx, job) in snapshot.experience.iter().enumerate() {
        let offset = idx as f32 * FIXED_ENTRY_STEP_MM;
        blocks.push(block(
            body,
            format!("{} ({})", job.heading(), job.period()),
            110.0 + offset,
            false,
        ));
        blocks.push(block(
            body,
            format!("Description: {}", job.description),
            120.0 + offset,
            false,
        ));
    }

    let n = snapshot.experience.len() as f32 * FIXED_ENTRY_STEP_MM;
    blocks.push(block(body, "Education:".to_string(), 150.0 + n, true));
    blocks.push(block(body, snapshot.education.clone(), 160.0 + n, false));
    blocks
}

fn line_height_mm(font_size_pt: f32) -> f32 {
    font_size_pt * LINE_HEIGHT_FACTOR * PT_TO_MM
}

// ────────────────────────────────────────────────────────────────────────────
// Layout entry points
// ────────────────────────────────────────────────────────────────────────────

pub fn layout_resume(snapshot: &ResumeData, mode: PdfLayoutMode) -> LaidOutDocument {
    let geometry = PageGeometry::default();
    match mode {
        PdfLayoutMode::Fixed => layout_fixed(snapshot, geometry),
        PdfLayoutMode::Flowing => layout_flowing(snapshot, geometry, &HELVETICA),
    }
}

/// Single page, hard-coded offsets. Embedded newlines continue one line
/// height further down from the block's own offset.
pub fn layout_fixed(snapshot: &ResumeData, geometry: PageGeometry) -> LaidOutDocument {
    let mut page = LaidOutPage::default();
    for b in resume_blocks(snapshot) {
        let step = line_height_mm(b.font_size_pt);
        for (i, line) in b.text.split('\n').enumerate() {
            page.items.push(PlacedText {
                x_mm: geometry.margin_left_mm,
                y_mm: b.fixed_y_mm + i as f32 * step,
                font_size_pt: b.font_size_pt,
                text: line.trim_end_matches('\r').to_string(),
            });
        }
    }
    LaidOutDocument {
        geometry,
        pages: vec![page],
    }
}

pub fn layout_flowing(
    snapshot: &ResumeData,
    geometry: PageGeometry,
    metrics: &FontMetricTable,
) -> LaidOutDocument {
    let mut pages = vec![LaidOutPage::default()];
    let mut y = geometry.margin_top_mm;
    let max_width = geometry.text_width_mm();

    for b in resume_blocks(snapshot) {
        let step = line_height_mm(b.font_size_pt);
        if b.starts_section {
            y += step * 0.5;
        }
        for paragraph in b.text.split('\n') {
            for line in metrics.wrap(paragraph, b.font_size_pt, max_width) {
                if y > geometry.bottom_limit_mm() {
                    pages.push(LaidOutPage::default());
                    y = geometry.margin_top_mm;
                }
                if let Some(page) = pages.last_mut() {
                    page.items.push(PlacedText {
                        x_mm: geometry.margin_left_mm,
                        y_mm: y,
                        font_size_pt: b.font_size_pt,
                        text: line,
                    });
                }
                y += step;
            }
        }
    }

    LaidOutDocument { geometry, pages }
}
