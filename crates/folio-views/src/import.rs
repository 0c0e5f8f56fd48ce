//! Progress output of a batch import.

use std::fmt::Display;

use async_trait::async_trait;
use futures::Sink;
use tracing::debug;

use folio_core::{as_record, field_str, RenderRequest, RenderResult};
use folio_streaming::{ChunkedResponder, StreamSummary};

use crate::services::Services;
use crate::view::StreamingView;

/// Outcome of importing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Imported,
    Duplicate,
    Failed,
}

impl ImportStatus {
    fn parse(raw: &str) -> Self {
        match raw {
            "imported" => Self::Imported,
            "duplicate" => Self::Duplicate,
            _ => Self::Failed,
        }
    }

    /// Translation key of the status label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Imported => "Imported",
            Self::Duplicate => "Skipped duplicate",
            Self::Failed => "Failed",
        }
    }
}

/// Writes one line per file, then a summary line, then closes the stream.
///
/// Input: `{"files": [{"name", "status"}]}` with status `imported`,
/// `duplicate` or anything else for a failure. Every record is read before
/// the first chunk, so malformed input fails with nothing written.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportProgressView;

impl ImportProgressView {
    fn files(request: &RenderRequest) -> RenderResult<Vec<(String, ImportStatus)>> {
        request
            .array("files")?
            .iter()
            .map(|file| {
                let record = as_record(file, "file")?;
                let status = record
                    .get("status")
                    .and_then(|v| v.as_str())
                    .map(ImportStatus::parse)
                    .unwrap_or(ImportStatus::Failed);
                Ok((field_str(record, "name")?.to_string(), status))
            })
            .collect()
    }
}

#[async_trait]
impl<S, E> StreamingView<S, E> for ImportProgressView
where
    S: Sink<Vec<u8>, Error = E> + Unpin + Send,
    E: Display + Send,
{
    fn name(&self) -> &'static str {
        "import_progress"
    }

    async fn main(
        &self,
        services: &Services,
        request: &RenderRequest,
        out: &mut ChunkedResponder<S, E>,
    ) -> RenderResult<StreamSummary> {
        let files = Self::files(request)?;
        let total = files.len();
        let mut imported = 0;

        for (index, (name, status)) in files.iter().enumerate() {
            if *status == ImportStatus::Imported {
                imported += 1;
            }

            let line = format!(
                "{}/{} {}: {}\n",
                index + 1,
                total,
                services.translate(status.label()),
                name
            );
            out.send_chunk(&line).await?;
        }

        let done = format!(
            "{} {}/{}\n",
            services.translate("Done. Imported"),
            imported,
            total
        );
        out.send_chunk(&done).await?;

        let summary = out.finish().await?;
        debug!(
            view = "import_progress",
            request_id = %out.request_id(),
            files = total,
            imported,
            bytes = summary.bytes,
            "import progress streamed"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{RenderError, TimingContext, ViewState};
    use futures::executor::block_on;
    use serde_json::json;
    use std::convert::Infallible;

    fn run(request: &RenderRequest) -> (RenderResult<StreamSummary>, Vec<Vec<u8>>) {
        block_on(async {
            let mut out: ChunkedResponder<Vec<Vec<u8>>, Infallible> =
                ChunkedResponder::new(Vec::new(), TimingContext::new());
            let result = ImportProgressView
                .main(&Services::default(), request, &mut out)
                .await;
            (result, out.into_inner())
        })
    }

    #[test]
    fn test_lines_per_file_then_summary() {
        let request = RenderRequest::from_value(json!({"files": [
            {"name": "a.pdf", "status": "imported"},
            {"name": "b.pdf", "status": "duplicate"},
            {"name": "c.pdf", "status": "broken"}
        ]}))
        .unwrap();

        let (summary, chunks) = run(&request);
        let summary = summary.unwrap();
        let lines: Vec<String> = chunks
            .iter()
            .map(|c| String::from_utf8(c.clone()).unwrap())
            .collect();

        assert_eq!(
            lines,
            vec![
                "1/3 Imported: a.pdf\n",
                "2/3 Skipped duplicate: b.pdf\n",
                "3/3 Failed: c.pdf\n",
                "Done. Imported 1/3\n",
            ]
        );
        assert_eq!(summary.chunks, 4);
        assert_eq!(summary.bytes, lines.iter().map(String::len).sum::<usize>());
    }

    #[test]
    fn test_empty_batch() {
        let request = RenderRequest::from_value(json!({"files": []})).unwrap();
        let (summary, chunks) = run(&request);
        assert_eq!(summary.unwrap().chunks, 1);
        assert_eq!(chunks, vec![b"Done. Imported 0/0\n".to_vec()]);
    }

    #[test]
    fn test_malformed_record_fails_before_output() {
        let request = RenderRequest::from_value(json!({"files": [
            {"name": "a.pdf", "status": "imported"},
            {"status": "imported"}
        ]}))
        .unwrap();

        block_on(async {
            let mut out: ChunkedResponder<Vec<Vec<u8>>, Infallible> =
                ChunkedResponder::new(Vec::new(), TimingContext::new());
            let err = ImportProgressView
                .main(&Services::default(), &request, &mut out)
                .await
                .unwrap_err();

            assert!(matches!(err, RenderError::MissingField(_)));
            assert_eq!(out.state(), ViewState::Idle);
            assert_eq!(out.chunks_sent(), 0);
            assert!(out.into_inner().is_empty());
        });
    }

    #[test]
    fn test_second_run_on_same_stream_fails() {
        let request = RenderRequest::from_value(json!({"files": []})).unwrap();
        block_on(async {
            let mut out: ChunkedResponder<Vec<Vec<u8>>, Infallible> =
                ChunkedResponder::new(Vec::new(), TimingContext::new());
            let services = Services::default();
            ImportProgressView
                .main(&services, &request, &mut out)
                .await
                .unwrap();
            let err = ImportProgressView
                .main(&services, &request, &mut out)
                .await
                .unwrap_err();
            assert!(matches!(err, RenderError::AlreadySent));
        });
    }
}
