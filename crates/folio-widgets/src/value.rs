//! Values accepted by widget fields.

use folio_core::{RenderError, RenderResult};

use crate::fragment::Fragment;

/// A value passed to [`Widget::configure`](crate::Widget::configure).
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetValue {
    /// Plain text, escaped when embedded.
    Text(String),
    /// Rendered markup, embedded verbatim.
    Html(Fragment),
    /// Name/value or label/href pair.
    Pair(String, String),
    /// Row or header cells.
    Cells(Vec<Fragment>),
    /// On/off switch.
    Flag(bool),
}

impl WidgetValue {
    /// Name of the value shape, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Html(_) => "html",
            Self::Pair(..) => "pair",
            Self::Cells(_) => "cells",
            Self::Flag(_) => "flag",
        }
    }

    /// Accept text only.
    pub fn into_text(self, widget: &'static str, field: &str) -> RenderResult<String> {
        match self {
            Self::Text(text) => Ok(text),
            other => Err(mismatch(widget, field, "text", &other)),
        }
    }

    /// Accept text (escaped) or markup.
    pub fn into_markup(self, widget: &'static str, field: &str) -> RenderResult<Fragment> {
        match self {
            Self::Text(text) => Ok(Fragment::text(&text)),
            Self::Html(html) => Ok(html),
            other => Err(mismatch(widget, field, "text or html", &other)),
        }
    }

    /// Accept a pair only.
    pub fn into_pair(self, widget: &'static str, field: &str) -> RenderResult<(String, String)> {
        match self {
            Self::Pair(a, b) => Ok((a, b)),
            other => Err(mismatch(widget, field, "pair", &other)),
        }
    }

    /// Accept cells only.
    pub fn into_cells(self, widget: &'static str, field: &str) -> RenderResult<Vec<Fragment>> {
        match self {
            Self::Cells(cells) => Ok(cells),
            other => Err(mismatch(widget, field, "cells", &other)),
        }
    }

    /// Accept a flag only.
    pub fn into_flag(self, widget: &'static str, field: &str) -> RenderResult<bool> {
        match self {
            Self::Flag(flag) => Ok(flag),
            other => Err(mismatch(widget, field, "flag", &other)),
        }
    }
}

fn mismatch(widget: &'static str, field: &str, expected: &str, got: &WidgetValue) -> RenderError {
    RenderError::invalid_value(
        widget,
        field,
        format!("expected {}, got {}", expected, got.shape()),
    )
}

impl From<&str> for WidgetValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for WidgetValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Fragment> for WidgetValue {
    fn from(f: Fragment) -> Self {
        Self::Html(f)
    }
}

impl From<(&str, &str)> for WidgetValue {
    fn from((a, b): (&str, &str)) -> Self {
        Self::Pair(a.to_string(), b.to_string())
    }
}

impl From<(String, String)> for WidgetValue {
    fn from((a, b): (String, String)) -> Self {
        Self::Pair(a, b)
    }
}

impl From<bool> for WidgetValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<Vec<Fragment>> for WidgetValue {
    fn from(cells: Vec<Fragment>) -> Self {
        Self::Cells(cells)
    }
}

impl From<Vec<&str>> for WidgetValue {
    fn from(cells: Vec<&str>) -> Self {
        Self::Cells(cells.into_iter().map(Fragment::text).collect())
    }
}

impl From<Vec<String>> for WidgetValue {
    fn from(cells: Vec<String>) -> Self {
        Self::Cells(cells.iter().map(|c| Fragment::text(c)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_markup_escapes() {
        let value = WidgetValue::from("a < b");
        assert_eq!(
            value.into_markup("button", "html").unwrap().as_str(),
            "a &lt; b"
        );
    }

    #[test]
    fn test_html_to_markup_verbatim() {
        let value = WidgetValue::from(Fragment::new("<i>x</i>"));
        assert_eq!(
            value.into_markup("button", "html").unwrap().as_str(),
            "<i>x</i>"
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let err = WidgetValue::from(true).into_text("button", "context").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'context' of button widget: expected text, got flag"
        );
    }

    #[test]
    fn test_string_cells_are_escaped() {
        let cells = WidgetValue::from(vec!["<x>", "y"]).into_cells("table", "head").unwrap();
        assert_eq!(cells[0].as_str(), "&lt;x&gt;");
        assert_eq!(cells[1].as_str(), "y");
    }
}
