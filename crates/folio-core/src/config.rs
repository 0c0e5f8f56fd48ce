//! Rendering configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Configuration shared by all views of one site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Site identity used in feeds and page titles.
    #[serde(default)]
    pub site: SiteConfig,

    /// Date and language settings.
    #[serde(default)]
    pub locale: LocaleConfig,

    /// Feature switches that change which widgets a view builds.
    #[serde(default)]
    pub features: FeatureFlags,

    /// Chunked output settings.
    #[serde(default)]
    pub streaming: StreamingConfig,
}

impl RenderConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RenderError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| {
                RenderError::Config(format!("Failed to parse JSON {}: {}", path.display(), e))
            })
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> RenderResult<Self> {
        toml::from_str(content).map_err(|e| RenderError::Config(e.to_string()))
    }
}

/// Site identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Absolute base URL, used for feed ids and links.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Feed author name.
    #[serde(default = "default_title")]
    pub author: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
            author: default_title(),
        }
    }
}

fn default_title() -> String {
    "I, Librarian".to_string()
}

fn default_base_url() -> String {
    "http://localhost/librarian/".to_string()
}

/// Date and language settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Language tag (e.g., "en_US").
    #[serde(default = "default_language")]
    pub language: String,

    /// strftime pattern for dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// strftime pattern for times.
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Offset of the user's timezone from UTC.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            utc_offset_minutes: 0,
        }
    }
}

fn default_language() -> String {
    "en_US".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}

/// Feature switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Allow self-registration.
    #[serde(default = "default_true")]
    pub signups: bool,

    /// Allow file uploads.
    #[serde(default = "default_true")]
    pub uploads: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            signups: true,
            uploads: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Chunked output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamingConfig {
    /// Flush the channel after every chunk.
    #[serde(default = "default_true")]
    pub flush_each_chunk: bool,

    /// Bytes to buffer before flushing when not flushing each chunk.
    #[serde(default = "default_max_buffer")]
    pub max_buffer_bytes: usize,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            flush_each_chunk: true,
            max_buffer_bytes: default_max_buffer(),
        }
    }
}

fn default_max_buffer() -> usize {
    8 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.site.title, "I, Librarian");
        assert!(config.features.signups);
        assert!(config.streaming.flush_each_chunk);
        assert_eq!(config.locale.utc_offset_minutes, 0);
    }

    #[test]
    fn test_partial_toml() {
        let config = RenderConfig::from_toml_str(
            r#"
            [site]
            title = "Lab Library"
            base_url = "https://lib.example.org/"

            [features]
            signups = false
            "#,
        )
        .unwrap();

        assert_eq!(config.site.title, "Lab Library");
        assert_eq!(config.site.author, "I, Librarian");
        assert!(!config.features.signups);
        assert!(config.features.uploads);
        assert_eq!(config.locale.language, "en_US");
    }

    #[test]
    fn test_invalid_toml() {
        let err = RenderConfig::from_toml_str("[site\ntitle=").unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("render.json");
        let mut file = std::fs::File::create(&json_path).unwrap();
        write!(file, r#"{{"locale": {{"utc_offset_minutes": 120}}}}"#).unwrap();
        let config = RenderConfig::load(&json_path).unwrap();
        assert_eq!(config.locale.utc_offset_minutes, 120);

        let toml_path = dir.path().join("render.toml");
        std::fs::write(&toml_path, "[streaming]\nflush_each_chunk = false\n").unwrap();
        let config = RenderConfig::load(&toml_path).unwrap();
        assert!(!config.streaming.flush_each_chunk);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RenderConfig::load("/nonexistent/render.toml").unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
    }
}
