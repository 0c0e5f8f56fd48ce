//! File download.

use std::fs::File;

use folio_core::{RenderError, RenderRequest, RenderResult};
use folio_streaming::{Disposition, FileResponder, Response};

use crate::context::ViewContext;
use crate::services::Services;
use crate::view::View;

/// Input: `{"path", "filename"?, "disposition"?}` where disposition is
/// `inline` (default) or `attachment`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadView;

impl DownloadView {
    fn disposition(request: &RenderRequest) -> RenderResult<Disposition> {
        match request.opt_str("disposition") {
            None | Some("inline") => Ok(Disposition::Inline),
            Some("attachment") => Ok(Disposition::Attachment),
            Some(_) => Err(RenderError::TypeMismatch {
                field: "disposition".to_string(),
                expected: "inline or attachment",
            }),
        }
    }
}

impl View for DownloadView {
    fn name(&self) -> &'static str {
        "download"
    }

    fn main(&self, _services: &Services, request: &RenderRequest) -> RenderResult<Response> {
        let mut ctx = ViewContext::new(self.name());
        let path = request.str("path")?;
        let disposition = Self::disposition(request)?;

        let responder = match request.opt_str("filename") {
            Some(filename) => FileResponder::new(File::open(path)?, filename),
            None => FileResponder::open(path)?,
        };
        ctx.send(responder.with_disposition(disposition))
    }
}
