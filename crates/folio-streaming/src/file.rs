//! File downloads.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use folio_core::sanitize::percent_encode;
use folio_core::{RenderError, RenderResult};
use http::header::{CONTENT_DISPOSITION, X_CONTENT_TYPE_OPTIONS};
use http::StatusCode;
use tracing::debug;

use crate::envelope::{Payload, Responder};
use crate::response::Response;

/// How the client should present a downloaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    /// Display in the browser where possible.
    #[default]
    Inline,
    /// Save to disk.
    Attachment,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Attachment => "attachment",
        }
    }
}

/// Streams a file body with its MIME type and disposition.
///
/// Accumulated envelope content is ignored; the file is the body.
#[derive(Debug)]
pub struct FileResponder<R: Read> {
    reader: R,
    filename: String,
    content_type: String,
    disposition: Disposition,
}

impl FileResponder<File> {
    /// Open a file on disk, naming the download after it.
    pub fn open(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| RenderError::MissingField(format!("file name of {}", path.display())))?;
        let file = File::open(path)?;
        Ok(Self::new(file, filename))
    }
}

impl<R: Read> FileResponder<R> {
    /// Serve `reader` under `filename`, guessing the MIME type from its extension.
    pub fn new(reader: R, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let content_type = guess_mime(&filename).to_string();
        Self {
            reader,
            filename,
            content_type,
            disposition: Disposition::Inline,
        }
    }

    /// Set the disposition (inline by default).
    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }

    /// Override the guessed MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Value of the `Content-Disposition` header.
    ///
    /// Non-ASCII names get an ASCII fallback plus an RFC 5987 `filename*`.
    pub fn content_disposition(&self) -> String {
        let fallback: String = self
            .filename
            .chars()
            .map(|c| {
                if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        let mut value = format!(r#"{}; filename="{}""#, self.disposition.as_str(), fallback);
        if !self.filename.is_ascii() {
            value.push_str(&format!(
                "; filename*=UTF-8''{}",
                percent_encode(&self.filename)
            ));
        }
        value
    }
}

impl<R: Read> Responder for FileResponder<R> {
    fn respond(mut self, _payload: Payload) -> RenderResult<Response> {
        let disposition = self.content_disposition();
        let mut body = Vec::new();
        self.reader.read_to_end(&mut body)?;

        let mut response = Response::with_body(StatusCode::OK, &self.content_type, body)?;
        response.set_header(CONTENT_DISPOSITION, &disposition)?;
        response.set_header(X_CONTENT_TYPE_OPTIONS, "nosniff")?;

        debug!(
            filename = %self.filename,
            disposition = self.disposition.as_str(),
            bytes = response.body.len(),
            "file response"
        );
        Ok(response)
    }
}

/// Guess a MIME type from a file name's extension.
pub fn guess_mime(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain; charset=utf-8",
        "htm" | "html" => "text/html; charset=utf-8",
        "csv" => "text/csv; charset=utf-8",
        "json" => "application/json",
        "xml" => "application/xml",
        "ris" => "application/x-research-info-systems",
        "bib" => "application/x-bibtex",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "epub" => "application/epub+zip",
        "zip" => "application/zip",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "odt" => "application/vnd.oasis.opendocument.text",
        _ => "application/octet-stream",
    }
}
