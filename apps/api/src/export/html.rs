//! Standalone HTML export.
//!
//! The page is self-contained: one inline style block, no scripts, no external
//! assets. With `HtmlEscaping::Verbatim` the field values are inserted exactly
//! as typed, so markup in a value becomes markup in the page. `Escaped`
//! entity-encodes `& < > " '` instead.

use std::borrow::Cow;
use std::fmt::Write;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::export::artifact::{export_filename, ExportArtifact};
use crate::models::resume::ResumeData;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlEscaping {
    #[default]
    Verbatim,
    Escaped,
}

impl HtmlEscaping {
    pub fn from_flag(escape: bool) -> Self {
        if escape {
            HtmlEscaping::Escaped
        } else {
            HtmlEscaping::Verbatim
        }
    }

    fn apply<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            HtmlEscaping::Verbatim => Cow::Borrowed(value),
            HtmlEscaping::Escaped => html_escape(value),
        }
    }
}

impl FromStr for HtmlEscaping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "escaped" => Ok(HtmlEscaping::Escaped),
            "false" | "0" | "no" | "verbatim" => Ok(HtmlEscaping::Verbatim),
            other => Err(format!("invalid HTML escaping flag '{other}' (expected true|false)")),
        }
    }
}

/// Escape HTML special characters.
pub fn html_escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

const STYLE: &str = r#"    body { font-family: Arial, sans-serif; margin: 20px; padding: 0; background: #f4f4f4; }
    .container { max-width: 900px; margin: 0 auto; background: #ffffff; padding: 20px; border-radius: 8px; box-shadow: 0px 4px 10px rgba(0, 0, 0, 0.1); }
    h1 { text-align: center; font-size: 24px; margin-bottom: 10px; color: #333333; }
    h2 { font-size: 20px; margin: 10px 0; color: #333333; }
    h3 { font-size: 18px; margin-top: 20px; color: #333333; }
    p { font-size: 16px; margin: 5px 0; color: #555555; }
    .section { margin-bottom: 20px; }
    .contact-info, .skills, .experience, .education { margin-bottom: 20px; }
    .contact-info p { font-size: 16px; color: #555555; }
    .skills ul, .experience ul, .education ul { list-style-type: none; padding: 0; }
    .skills li, .experience li, .education li { margin-bottom: 10px; }
    .experience li { background-color: #f8f8f8; padding: 10px; border-radius: 6px; box-shadow: 0px 2px 5px rgba(0, 0, 0, 0.05); }
    .experience li strong { color: #333333; }
    .experience li p { color: #666666; }
"#;

/// Renders the full page for `snapshot`.
pub fn render_html(snapshot: &ResumeData, escaping: HtmlEscaping) -> String {
    let v = |s: &str| escaping.apply(s).into_owned();

    let mut experience = String::new();
    for job in &snapshot.experience {
        // writing into a String cannot fail
        let _ = write!(
            experience,
            "        <li>\n          <strong>{} at {} ({} - {})</strong>\n          <p>{}</p>\n        </li>\n",
            v(&job.title),
            v(&job.company),
            v(&job.start_date),
            v(&job.end_date),
            v(&job.description),
        );
    }

    format!(
        r#"<html>
<head>
  <title>Resume - {name}</title>
  <style>
{STYLE}  </style>
</head>
<body>
  <div class="container">
    <h1>Resume</h1>
    <h2>{name}</h2>
    <div class="contact-info">
      <p><strong>Email:</strong> {email}</p>
      <p><strong>Phone:</strong> {phone}</p>
    </div>
    <div class="skills section">
      <h3>Skills</h3>
      <ul>
        <li>{skills}</li>
      </ul>
    </div>
    <div class="experience section">
      <h3>Experience</h3>
      <ul>
{experience}      </ul>
    </div>
    <div class="education section">
      <h3>Education</h3>
      <ul>
        <li>{education}</li>
      </ul>
    </div>
  </div>
</body>
</html>
"#,
        name = v(&snapshot.name),
        email = v(&snapshot.email),
        phone = v(&snapshot.phone),
        skills = v(&snapshot.skills),
        education = v(&snapshot.education),
    )
}

/// Renders `snapshot` to `{name}_resume.html`.
pub fn export_html(snapshot: &ResumeData, escaping: HtmlEscaping) -> ExportArtifact {
    ExportArtifact {
        filename: export_filename(&snapshot.name, "html"),
        content_type: HTML_CONTENT_TYPE,
        bytes: Bytes::from(render_html(snapshot, escaping)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;

    fn make_snapshot() -> ResumeData {
        ResumeData {
            name: "Ana Lee".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
            skills: "Go".to_string(),
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                title: "Eng".to_string(),
                start_date: "2020-01-01".to_string(),
                end_date: "2022-01-01".to_string(),
                description: "Built things".to_string(),
            }],
            education: "BS CS".to_string(),
        }
    }

    #[test]
    fn test_scenario_substrings() {
        let html = render_html(&make_snapshot(), HtmlEscaping::Verbatim);
        for needle in [
            "Ana Lee",
            "Eng at Acme",
            "2020-01-01 - 2022-01-01",
            "Built things",
            "BS CS",
            "a@x.com",
            "555",
            "Go",
        ] {
            assert!(html.contains(needle), "missing {needle}");
        }
        assert!(html.contains("<title>Resume - Ana Lee</title>"));
        assert!(html.contains("<h2>Ana Lee</h2>"));
        assert!(html.contains("<strong>Eng at Acme (2020-01-01 - 2022-01-01)</strong>"));
    }

    #[test]
    fn test_verbatim_keeps_markup() {
        let mut snapshot = make_snapshot();
        snapshot.skills = "<script>alert('x')</script> & Rust".to_string();
        let html = render_html(&snapshot, HtmlEscaping::Verbatim);
        assert!(html.contains("<li><script>alert('x')</script> & Rust</li>"));
    }

    #[test]
    fn test_escaped_neutralises_markup() {
        let mut snapshot = make_snapshot();
        snapshot.skills = "<script>alert('x')</script>".to_string();
        snapshot.experience[0].company = "R&D".to_string();
        let html = render_html(&snapshot, HtmlEscaping::Escaped);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
        assert!(html.contains("Eng at R&amp;D"));
    }

    #[test]
    fn test_experience_in_order() {
        let mut snapshot = make_snapshot();
        snapshot.experience.push(ExperienceEntry {
            title: "Lead".to_string(),
            company: "Globex".to_string(),
            ..Default::default()
        });
        let html = render_html(&snapshot, HtmlEscaping::Verbatim);
        let first = html.find("Eng at Acme").unwrap();
        let second = html.find("Lead at Globex ( - )").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<li>\n          <strong>").count(), 2);
    }

    #[test]
    fn test_export_html_filename() {
        let artifact = export_html(&make_snapshot(), HtmlEscaping::Verbatim);
        assert_eq!(artifact.filename, "Ana Lee_resume.html");
        assert_eq!(artifact.content_type, HTML_CONTENT_TYPE);

        let empty = export_html(&ResumeData::default(), HtmlEscaping::Verbatim);
        assert_eq!(empty.filename, "_resume.html");
    }

    #[test]
    fn test_html_escape_borrows_when_clean() {
        assert!(matches!(html_escape("plain"), Cow::Borrowed(_)));
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn test_escaping_flag_parse() {
        assert_eq!("true".parse::<HtmlEscaping>().unwrap(), HtmlEscaping::Escaped);
        assert_eq!("FALSE".parse::<HtmlEscaping>().unwrap(), HtmlEscaping::Verbatim);
        assert!("maybe".parse::<HtmlEscaping>().is_err());
    }
}
