//! Incremental output over an open channel.

use std::fmt::Display;
use std::marker::PhantomData;

use folio_core::{RenderError, RenderResult, RequestId, TimingContext, ViewState};
use futures::{Sink, SinkExt};
use tracing::{debug, warn};

use crate::flush::{FlushController, FlushPolicy};

/// Totals reported when a chunked response finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    /// Number of chunks written.
    pub chunks: usize,
    /// Total bytes written.
    pub bytes: usize,
}

/// Writes chunks to the channel as they are produced.
///
/// Generic over any `Sink<Vec<u8>>`, so the same code drives a socket
/// body, an in-memory buffer or a test vector. Each chunk is sent as its
/// raw bytes and the reported length is exactly the bytes written.
pub struct ChunkedResponder<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    request_id: RequestId,
    state: ViewState,
    timing: TimingContext,
    flush: FlushController,
    chunks: usize,
    bytes: usize,
    _error: PhantomData<fn() -> E>,
}

impl<S, E> ChunkedResponder<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new chunked responder flushing after every chunk.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            request_id: RequestId::generate(),
            state: ViewState::Idle,
            timing,
            flush: FlushController::default(),
            chunks: 0,
            bytes: 0,
            _error: PhantomData,
        }
    }

    /// Use a request id assigned by the dispatcher.
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id;
        self
    }

    /// Set the flush policy.
    pub fn with_flush_policy(mut self, policy: FlushPolicy) -> Self {
        self.flush = FlushController::new(policy);
        self
    }

    /// Write one chunk and return its length in bytes.
    pub async fn send_chunk(&mut self, chunk: &str) -> RenderResult<usize> {
        self.check_open("send_chunk")?;

        self.timing.mark_once("first_chunk");
        let len = chunk.len();
        self.inner
            .feed(chunk.as_bytes().to_vec())
            .await
            .map_err(|e| RenderError::Stream(e.to_string()))?;

        self.state = ViewState::Accumulating;
        self.chunks += 1;
        self.bytes += len;
        self.flush.add_bytes(len);

        if self.flush.should_flush() {
            self.flush_inner().await?;
        }

        debug!(
            request_id = %self.request_id,
            len,
            total = self.bytes,
            chunk = self.chunks,
            "chunk sent"
        );
        Ok(len)
    }

    /// Flush pending chunks regardless of policy.
    pub async fn flush(&mut self) -> RenderResult<()> {
        self.check_open("flush")?;
        self.flush_inner().await
    }

    /// Flush and close the channel. Allowed exactly once.
    pub async fn finish(&mut self) -> RenderResult<StreamSummary> {
        self.check_open("finish")?;
        self.state = ViewState::Sent;

        self.inner
            .close()
            .await
            .map_err(|e| RenderError::Stream(e.to_string()))?;
        self.flush.reset();
        self.timing.mark("sent");

        let summary = self.summary();
        debug!(
            request_id = %self.request_id,
            chunks = summary.chunks,
            bytes = summary.bytes,
            elapsed_ms = self.timing.elapsed().as_millis() as u64,
            "chunked response finished"
        );
        Ok(summary)
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Total bytes written so far.
    pub fn bytes_sent(&self) -> usize {
        self.bytes
    }

    /// Number of chunks written so far.
    pub fn chunks_sent(&self) -> usize {
        self.chunks
    }

    pub fn summary(&self) -> StreamSummary {
        StreamSummary {
            chunks: self.chunks,
            bytes: self.bytes,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the responder and return the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }

    async fn flush_inner(&mut self) -> RenderResult<()> {
        self.inner
            .flush()
            .await
            .map_err(|e| RenderError::Stream(e.to_string()))?;
        self.flush.reset();
        Ok(())
    }

    fn check_open(&self, operation: &'static str) -> RenderResult<()> {
        if self.state.is_sent() {
            warn!(
                request_id = %self.request_id,
                operation,
                "chunked response already finished"
            );
            return Err(RenderError::AlreadySent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn responder() -> ChunkedResponder<Vec<Vec<u8>>, std::convert::Infallible> {
        ChunkedResponder::new(Vec::new(), TimingContext::new())
    }

    #[test]
    fn test_reported_lengths_match_bytes() {
        block_on(async {
            let mut out = responder();
            let mut reported = 0;
            for chunk in ["<p>1</p>", "", "<p>zwölf</p>"] {
                reported += out.send_chunk(chunk).await.unwrap();
            }
            let summary = out.finish().await.unwrap();

            let written: usize = out.into_inner().iter().map(Vec::len).sum();
            assert_eq!(reported, written);
            assert_eq!(summary.bytes, written);
            assert_eq!(summary.chunks, 3);
        });
    }

    #[test]
    fn test_chunks_arrive_in_order() {
        block_on(async {
            let mut out = responder();
            out.send_chunk("a").await.unwrap();
            out.send_chunk("b").await.unwrap();
            out.finish().await.unwrap();
            assert_eq!(out.into_inner(), vec![b"a".to_vec(), b"b".to_vec()]);
        });
    }

    #[test]
    fn test_state_and_timing() {
        block_on(async {
            let mut out = responder();
            assert_eq!(out.state(), ViewState::Idle);
            out.send_chunk("x").await.unwrap();
            assert_eq!(out.state(), ViewState::Accumulating);
            assert!(out.timing().has_mark("first_chunk"));
            out.finish().await.unwrap();
            assert_eq!(out.state(), ViewState::Sent);
            assert!(out.timing().time_to_send().is_some());
        });
    }

    #[test]
    fn test_finish_without_chunks() {
        block_on(async {
            let mut out = responder();
            let summary = out.finish().await.unwrap();
            assert_eq!(summary, StreamSummary { chunks: 0, bytes: 0 });
        });
    }

    #[test]
    fn test_calls_after_finish_fail() {
        block_on(async {
            let mut out = responder();
            out.finish().await.unwrap();
            assert!(matches!(
                out.send_chunk("late").await,
                Err(RenderError::AlreadySent)
            ));
            assert!(matches!(out.finish().await, Err(RenderError::AlreadySent)));
            assert!(matches!(out.flush().await, Err(RenderError::AlreadySent)));
            assert_eq!(out.bytes_sent(), 0);
        });
    }

    #[test]
    fn test_request_id_override() {
        let out = responder().with_request_id(RequestId::from_string("req-9"));
        assert_eq!(out.request_id().to_string(), "req-9");
    }

    #[test]
    fn test_manual_policy_still_writes() {
        block_on(async {
            let mut out = responder().with_flush_policy(FlushPolicy::Manual);
            out.send_chunk("abc").await.unwrap();
            out.flush().await.unwrap();
            out.finish().await.unwrap();
            assert_eq!(out.chunks_sent(), 1);
            assert_eq!(out.into_inner(), vec![b"abc".to_vec()]);
        });
    }
}
