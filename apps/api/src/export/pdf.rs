//! PDF writer: serialises a `LaidOutDocument` with lopdf.
//!
//! Text is drawn in the standard Helvetica font with WinAnsi encoding, so no
//! font program is embedded. Characters outside Windows-1252 are written as `?`.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use encoding_rs::WINDOWS_1252;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use tracing::debug;

use crate::export::artifact::{export_filename, ExportArtifact};
use crate::export::font_metrics::PT_TO_MM;
use crate::export::layout::{
    layout_resume, LaidOutDocument, LaidOutPage, PageGeometry, PdfLayoutMode,
};
use crate::export::ExportError;
use crate::models::resume::ResumeData;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
const PRODUCER: &str = concat!("resume-builder-api ", env!("CARGO_PKG_VERSION"));

/// Lays out `snapshot` and renders it to `{name}_resume.pdf`.
pub fn export_pdf(
    snapshot: &ResumeData,
    mode: PdfLayoutMode,
) -> Result<ExportArtifact, ExportError> {
    let laid_out = layout_resume(snapshot, mode);
    let title = format!("Resume - {}", snapshot.name);
    let bytes = render_pdf(&laid_out, &title, Utc::now())?;
    debug!(
        %mode,
        pages = laid_out.pages.len(),
        lines = laid_out.all_items().count(),
        size = bytes.len(),
        "PDF rendered"
    );

    Ok(ExportArtifact {
        filename: export_filename(&snapshot.name, "pdf"),
        content_type: PDF_CONTENT_TYPE,
        bytes: Bytes::from(bytes),
    })
}

pub fn render_pdf(
    laid_out: &LaidOutDocument,
    title: &str,
    created_at: DateTime<Utc>,
) -> Result<Vec<u8>, ExportError> {
    let geometry = laid_out.geometry;
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(laid_out.pages.len());
    for page in &laid_out.pages {
        let content = Content {
            operations: page_operations(page, &geometry),
        };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Pdf(format!("content encode: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        (geometry.width_mm / PT_TO_MM).into(),
        (geometry.height_mm / PT_TO_MM).into(),
    ];
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => media_box,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_win_ansi(title)),
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(pdf_date(created_at)),
    });
    doc.trailer.set("Info", info_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save: {e}")))?;
    Ok(buf)
}

fn page_operations(page: &LaidOutPage, geometry: &PageGeometry) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(page.items.len() * 5);
    for item in &page.items {
        let x_pt = item.x_mm / PT_TO_MM;
        let y_pt = (geometry.height_mm - item.y_mm) / PT_TO_MM;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec!["F1".into(), item.font_size_pt.into()],
        ));
        ops.push(Operation::new("Td", vec![x_pt.into(), y_pt.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&item.text),
                StringFormat::Literal,
            )],
        ));
        ops.push(Operation::new("ET", vec![]));
    }
    ops
}

/// Maps text onto WinAnsi (Windows-1252) bytes. Control characters become
/// spaces; characters the code page cannot represent become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut utf8 = [0u8; 4];
    for c in text.chars() {
        if c.is_control() {
            out.push(b' ');
            continue;
        }
        let (bytes, _, had_errors) = WINDOWS_1252.encode(c.encode_utf8(&mut utf8));
        match bytes.as_ref() {
            [byte] if !had_errors => out.push(*byte),
            _ => out.push(b'?'),
        }
    }
    out
}

fn pdf_date(at: DateTime<Utc>) -> String {
    at.format("D:%Y%m%d%H%M%SZ").to_string()
}
