//! Whole-body responses: JSON envelope or HTML.

use http::StatusCode;
use serde_json::{Map, Value};
use tracing::debug;

use folio_core::RenderResult;

use crate::envelope::{Payload, Responder, HTML_KEY};
use crate::response::Response;
use crate::shell::Shell;

/// Content type of JSON envelopes.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Content type of HTML bodies.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Body format of a buffered response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BufferedFormat {
    /// `{"html": ..., <fields>}`
    #[default]
    Json,
    /// The HTML alone; fields are dropped.
    Html,
}

/// Sends the whole accumulated payload in one body.
#[derive(Debug, Clone, Default)]
pub struct BufferedResponder {
    format: BufferedFormat,
    shell: Option<Shell>,
    status: Option<StatusCode>,
}

impl BufferedResponder {
    /// JSON envelope of HTML plus data fields.
    pub fn json() -> Self {
        Self::default()
    }

    /// Bare HTML fragment.
    pub fn html() -> Self {
        Self {
            format: BufferedFormat::Html,
            ..Self::default()
        }
    }

    /// Full HTML document built from `shell`.
    pub fn page(shell: Shell) -> Self {
        Self {
            format: BufferedFormat::Html,
            shell: Some(shell),
            status: None,
        }
    }

    /// Override the status code (200 by default).
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn format(&self) -> &BufferedFormat {
        &self.format
    }
}

impl Responder for BufferedResponder {
    fn respond(self, payload: Payload) -> RenderResult<Response> {
        let status = self.status.unwrap_or(StatusCode::OK);

        let (content_type, body) = match self.format {
            BufferedFormat::Json => {
                let mut envelope = Map::with_capacity(payload.fields.len() + 1);
                envelope.insert(HTML_KEY.to_string(), Value::String(payload.html));
                envelope.extend(payload.fields);
                (JSON_CONTENT_TYPE, serde_json::to_vec(&Value::Object(envelope))?)
            }
            BufferedFormat::Html => {
                let html = match &self.shell {
                    Some(shell) => shell.wrap(&payload.html),
                    None => payload.html,
                };
                (HTML_CONTENT_TYPE, html.into_bytes())
            }
        };

        debug!(
            status = status.as_u16(),
            content_type,
            bytes = body.len(),
            "buffered response"
        );
        Response::with_body(status, content_type, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::HeadContent;
    use serde_json::json;

    fn payload() -> Payload {
        let mut fields = Map::new();
        fields.insert("satisfied".to_string(), json!(true));
        Payload {
            html: "<table></table>".to_string(),
            fields,
        }
    }

    #[test]
    fn test_json_envelope() {
        let response = BufferedResponder::json().respond(payload()).unwrap();
        assert_eq!(response.content_type(), Some(JSON_CONTENT_TYPE));
        let body: Value = response.json().unwrap();
        assert_eq!(body, json!({"html": "<table></table>", "satisfied": true}));
        assert_eq!(response.content_length(), Some(response.body.len()));
    }

    #[test]
    fn test_html_fragment() {
        let response = BufferedResponder::html().respond(payload()).unwrap();
        assert_eq!(response.content_type(), Some(HTML_CONTENT_TYPE));
        assert_eq!(response.text().unwrap(), "<table></table>");
    }

    #[test]
    fn test_html_page() {
        let shell = Shell::new(HeadContent::new("Items"));
        let response = BufferedResponder::page(shell).respond(payload()).unwrap();
        let text = response.text().unwrap();
        assert!(text.starts_with("<!DOCTYPE html>"));
        assert!(text.contains("<table></table>"));
    }

    #[test]
    fn test_status_override() {
        let response = BufferedResponder::json()
            .with_status(StatusCode::NOT_FOUND)
            .respond(Payload::default())
            .unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}
