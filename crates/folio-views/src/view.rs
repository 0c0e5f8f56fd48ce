//! View traits.

use std::fmt::Display;

use async_trait::async_trait;
use futures::Sink;

use folio_core::{RenderRequest, RenderResult};
use folio_streaming::{ChunkedResponder, Response, StreamSummary};

use crate::services::Services;

/// A request-scoped orchestrator producing exactly one response.
///
/// Every call to `main` (or to a sub-view method) is an independent
/// invocation with its own [`ViewContext`](crate::ViewContext).
pub trait View {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Entry point invoked by the dispatcher.
    fn main(&self, services: &Services, request: &RenderRequest) -> RenderResult<Response>;
}

/// A view that writes its output incrementally to an open channel.
#[async_trait]
pub trait StreamingView<S, E>: Send + Sync
where
    S: Sink<Vec<u8>, Error = E> + Unpin + Send,
    E: Display + Send,
{
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Write every chunk, then finish the stream.
    async fn main(
        &self,
        services: &Services,
        request: &RenderRequest,
        out: &mut ChunkedResponder<S, E>,
    ) -> RenderResult<StreamSummary>;
}
