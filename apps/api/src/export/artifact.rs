use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

/// An export held in memory until it is written out as a download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

/// `{name}_resume.{extension}`. An empty name gives `_resume.{extension}`.
pub fn export_filename(name: &str, extension: &str) -> String {
    format!("{name}_resume.{extension}")
}

/// Builds a `Content-Disposition: attachment` value for `filename`.
///
/// The quoted `filename` is ASCII only: control characters and non-ASCII
/// characters become `_`, quotes and backslashes are escaped. When the name
/// has non-ASCII characters the exact UTF-8 name is also sent as an RFC 5987
/// `filename*` parameter.
pub fn content_disposition(filename: &str) -> String {
    let mut fallback = String::with_capacity(filename.len());
    for c in filename.chars() {
        match c {
            '"' | '\\' => {
                fallback.push('\\');
                fallback.push(c);
            }
            c if c.is_control() || !c.is_ascii() => fallback.push('_'),
            c => fallback.push(c),
        }
    }

    if filename.is_ascii() {
        format!("attachment; filename=\"{fallback}\"")
    } else {
        format!(
            "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
            rfc5987_encode(filename)
        )
    }
}

/// Percent-encodes every byte outside RFC 5987 `attr-char`.
fn rfc5987_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'!'
            | b'#'
            | b'$'
            | b'&'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

impl IntoResponse for ExportArtifact {
    fn into_response(self) -> Response {
        let disposition = content_disposition(&self.filename);
        let disposition = HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(self.content_type)),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Ana Lee", "pdf"), "Ana Lee_resume.pdf");
        assert_eq!(export_filename("", "html"), "_resume.html");
    }

    #[test]
    fn test_content_disposition_plain() {
        assert_eq!(
            content_disposition("Ana Lee_resume.pdf"),
            "attachment; filename=\"Ana Lee_resume.pdf\""
        );
    }

    #[test]
    fn test_content_disposition_sanitises() {
        let value = content_disposition("a\"b\nc_resume.html");
        assert_eq!(value, "attachment; filename=\"a\\\"b_c_resume.html\"");
        assert!(HeaderValue::from_str(&value).is_ok());
    }

    #[test]
    fn test_content_disposition_non_ascii_adds_extended_param() {
        let value = content_disposition("Zo\u{eb} \u{201C}Q\u{201D}_resume.pdf");
        assert_eq!(
            value,
            "attachment; filename=\"Zo_ _Q__resume.pdf\"; \
             filename*=UTF-8''Zo%C3%AB%20%E2%80%9CQ%E2%80%9D_resume.pdf"
        );
        assert!(value.is_ascii());
        assert!(HeaderValue::from_str(&value).is_ok());
    }

    #[test]
    fn test_into_response_headers() {
        let artifact = ExportArtifact {
            filename: "_resume.html".to_string(),
            content_type: "text/html; charset=utf-8",
            bytes: Bytes::from_static(b"<html></html>"),
        };
        let response = artifact.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"_resume.html\""
        );
    }
}
