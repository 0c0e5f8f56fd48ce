//! Collaborator services consumed by views.
//!
//! Views only rely on the input/output contract of these traits; the
//! implementations here are the defaults used when nothing else is wired in.

use std::collections::HashMap;
use std::fmt::Write;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

use crate::config::LocaleConfig;
use crate::error::{RenderError, RenderResult};

/// Looks up user-facing text by key.
pub trait Translator: Send + Sync {
    /// Translate a key. Unknown keys come back unchanged.
    fn translate(&self, key: &str) -> String;
}

/// In-memory translation catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog (every key translates to itself).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation.
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    /// Parse a flat TOML table of `key = "text"` pairs.
    pub fn from_toml_str(content: &str) -> RenderResult<Self> {
        let entries: HashMap<String, String> =
            toml::from_str(content).map_err(|e| RenderError::Config(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Converts stored timestamps into the user's date and time.
pub trait DateLocalizer: Send + Sync {
    /// Format the date part in the user's locale and timezone.
    fn to_user_date(&self, raw: &str) -> RenderResult<String>;

    /// Format the time part in the user's locale and timezone.
    fn to_user_time(&self, raw: &str) -> RenderResult<String>;
}

/// Date localizer driven by [`LocaleConfig`].
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    date_format: String,
    time_format: String,
    offset: FixedOffset,
}

impl LocaleFormatter {
    /// Build from locale settings.
    pub fn new(locale: &LocaleConfig) -> RenderResult<Self> {
        let offset = FixedOffset::east_opt(locale.utc_offset_minutes * 60).ok_or_else(|| {
            RenderError::Config(format!(
                "UTC offset out of range: {} minutes",
                locale.utc_offset_minutes
            ))
        })?;

        Ok(Self {
            date_format: locale.date_format.clone(),
            time_format: locale.time_format.clone(),
            offset,
        })
    }

    fn render(&self, raw: &str, pattern: &str) -> RenderResult<String> {
        let local = parse_timestamp(raw)?.with_timezone(&self.offset);
        let mut out = String::new();
        write!(out, "{}", local.format(pattern))
            .map_err(|_| RenderError::Config(format!("Invalid date pattern: {}", pattern)))?;
        Ok(out)
    }
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        let locale = LocaleConfig::default();
        Self {
            date_format: locale.date_format,
            time_format: locale.time_format,
            offset: Utc.fix(),
        }
    }
}

impl DateLocalizer for LocaleFormatter {
    fn to_user_date(&self, raw: &str) -> RenderResult<String> {
        self.render(raw, &self.date_format)
    }

    fn to_user_time(&self, raw: &str) -> RenderResult<String> {
        self.render(raw, &self.time_format)
    }
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 as well as `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`,
/// the latter two read as UTC.
pub fn parse_timestamp(raw: &str) -> RenderResult<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc().fixed_offset());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| RenderError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_fallback() {
        let catalog = Catalog::new().with("Tags", "Štítky");
        assert_eq!(catalog.translate("Tags"), "Štítky");
        assert_eq!(catalog.translate("Items"), "Items");
    }

    #[test]
    fn test_catalog_from_toml() {
        let catalog = Catalog::from_toml_str("Tags = \"Etiketten\"\nItems = \"Einträge\"").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.translate("Items"), "Einträge");
        assert!(Catalog::from_toml_str("Tags = 3").is_err());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let rfc = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
        let sql = parse_timestamp("2024-01-01 00:00:00").unwrap();
        let date = parse_timestamp("2024-01-01").unwrap();
        assert_eq!(rfc, sql);
        assert_eq!(sql, date);
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(RenderError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_locale_formatter_default() {
        let dates = LocaleFormatter::default();
        assert_eq!(dates.to_user_date("2024-03-05 14:30:00").unwrap(), "Mar 5, 2024");
        assert_eq!(dates.to_user_time("2024-03-05 14:30:00").unwrap(), "14:30");
    }

    #[test]
    fn test_locale_formatter_offset() {
        let locale = LocaleConfig {
            date_format: "%Y-%m-%d".to_string(),
            utc_offset_minutes: 120,
            ..LocaleConfig::default()
        };
        let dates = LocaleFormatter::new(&locale).unwrap();
        assert_eq!(dates.to_user_date("2024-03-05T23:30:00Z").unwrap(), "2024-03-06");
        assert_eq!(dates.to_user_time("2024-03-05T23:30:00Z").unwrap(), "01:30");
    }

    #[test]
    fn test_locale_formatter_rejects_bad_offset() {
        let locale = LocaleConfig {
            utc_offset_minutes: 100_000,
            ..LocaleConfig::default()
        };
        assert!(LocaleFormatter::new(&locale).is_err());
    }

    #[test]
    fn test_formatter_does_not_mutate() {
        let dates = LocaleFormatter::default();
        let first = dates.to_user_date("2024-01-01").unwrap();
        let second = dates.to_user_date("2024-01-01").unwrap();
        assert_eq!(first, second);
    }
}
