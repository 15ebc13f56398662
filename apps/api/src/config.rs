use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::export::{HtmlEscaping, PdfLayoutMode};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub rust_log: String,
    /// PDF layout used when a request does not pick one.
    pub pdf_layout: PdfLayoutMode,
    /// HTML escaping used when a request does not pick one.
    pub html_escaping: HtmlEscaping,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            pdf_layout: PdfLayoutMode::Fixed,
            html_escaping: HtmlEscaping::Verbatim,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            bind_addr: parse_env("BIND_ADDR", defaults.bind_addr)?,
            port: parse_env("PORT", defaults.port)?,
            rust_log: parse_env("RUST_LOG", defaults.rust_log)?,
            pdf_layout: parse_env("PDF_LAYOUT", defaults.pdf_layout)?,
            html_escaping: parse_env("HTML_EXPORT_ESCAPE", defaults.html_escaping)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow!("Environment variable '{key}' is invalid: {e}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let port: u16 = parse_env("RESUME_BUILDER_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_env_rejects_malformed_value() {
        std::env::set_var("RESUME_BUILDER_TEST_BAD_LAYOUT", "grid");
        let err = parse_env("RESUME_BUILDER_TEST_BAD_LAYOUT", PdfLayoutMode::Fixed).unwrap_err();
        assert!(err.to_string().contains("RESUME_BUILDER_TEST_BAD_LAYOUT"));

        std::env::set_var("RESUME_BUILDER_TEST_ESCAPE", "true");
        let escaping =
            parse_env("RESUME_BUILDER_TEST_ESCAPE", HtmlEscaping::Verbatim).unwrap();
        assert_eq!(escaping, HtmlEscaping::Escaped);
    }
}
