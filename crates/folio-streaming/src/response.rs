//! Finished HTTP-style responses.

use std::io::Write;

use folio_core::{RenderError, RenderResult};
use http::header::{HeaderName, HeaderValue, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

/// A complete response produced by a responder.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a response with content type and content length set.
    pub fn with_body(status: StatusCode, content_type: &str, body: Vec<u8>) -> RenderResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, header_value(content_type)?);
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        Ok(Self::new(status, headers, body))
    }

    /// Add or replace a header.
    pub fn set_header(&mut self, name: HeaderName, value: &str) -> RenderResult<()> {
        self.headers.insert(name, header_value(value)?);
        Ok(())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get the response body as text.
    pub fn text(&self) -> RenderResult<String> {
        String::from_utf8(self.body.clone())
            .map_err(|e| RenderError::Serialization(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> RenderResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Get the raw response body.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Get a header value. Lookup is case-insensitive.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).and_then(|v| v.to_str().ok())
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE.as_str())
    }

    /// Get the Content-Length header.
    pub fn content_length(&self) -> Option<usize> {
        self.header(CONTENT_LENGTH.as_str())
            .and_then(|v| v.parse().ok())
    }

    /// Get the Content-Disposition header.
    pub fn disposition(&self) -> Option<&str> {
        self.header(CONTENT_DISPOSITION.as_str())
    }

    /// Write the body to an output channel, returning the byte count.
    pub fn write_to<W: Write>(&self, out: &mut W) -> RenderResult<usize> {
        out.write_all(&self.body)?;
        out.flush()?;
        Ok(self.body.len())
    }
}

/// Convert a string into a header value.
pub fn header_value(value: &str) -> RenderResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| RenderError::Serialization(format!("Invalid header value: {:?}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            body.to_vec(),
        )
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(404, b"").is_success());
        assert!(!make_response(500, b"").is_success());
    }

    #[test]
    fn test_with_body_sets_length() {
        let resp = Response::with_body(StatusCode::OK, "text/html", b"<p>x</p>".to_vec()).unwrap();
        assert_eq!(resp.content_type(), Some("text/html"));
        assert_eq!(resp.content_length(), Some(8));
    }

    #[test]
    fn test_response_text() {
        let resp = make_response(200, b"Hello, World!");
        assert_eq!(resp.text().unwrap(), "Hello, World!");
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = make_response(200, &[0xff, 0xfe]);
        assert!(resp.text().is_err());
    }

    #[test]
    fn test_response_json() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        struct Data {
            html: String,
        }

        let resp = make_response(200, br#"{"html": "<p></p>"}"#);
        let data: Data = resp.json().unwrap();
        assert_eq!(
            data,
            Data {
                html: "<p></p>".to_string()
            }
        );
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let mut resp = make_response(200, b"");
        resp.set_header(CONTENT_DISPOSITION, "inline").unwrap();
        assert_eq!(resp.header("Content-Disposition"), Some("inline"));
        assert_eq!(resp.header("CONTENT-DISPOSITION"), Some("inline"));
        assert_eq!(resp.disposition(), Some("inline"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_invalid_header_value() {
        let mut resp = make_response(200, b"");
        assert!(resp.set_header(CONTENT_TYPE, "text/html\n").is_err());
    }

    #[test]
    fn test_write_to() {
        let resp = make_response(200, b"abc");
        let mut out = Vec::new();
        assert_eq!(resp.write_to(&mut out).unwrap(), 3);
        assert_eq!(out, b"abc");
    }
}
