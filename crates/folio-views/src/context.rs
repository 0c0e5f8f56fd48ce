//! Per-invocation view state.

use serde::Serialize;
use tracing::{debug, warn};

use folio_core::{RenderError, RenderResult, RequestId, TimingContext, ViewState};
use folio_streaming::{Envelope, Responder, Response};
use folio_widgets::{Fragment, Widget, WidgetKind};

/// Everything one view invocation owns: the envelope, timing and request id.
///
/// Created fresh for each `main` or sub-view call and dropped after sending.
#[derive(Debug)]
pub struct ViewContext {
    view: &'static str,
    request_id: RequestId,
    envelope: Envelope,
    timing: TimingContext,
}

impl ViewContext {
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            request_id: RequestId::generate(),
            envelope: Envelope::new(),
            timing: TimingContext::new(),
        }
    }

    /// Use a request id assigned by the dispatcher.
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn view(&self) -> &'static str {
        self.view
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn state(&self) -> ViewState {
        self.envelope.state()
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Create a fresh widget of a statically known type.
    ///
    /// Refused once the view has sent. Widgets are plain values, so one
    /// created earlier can still be configured and rendered after sending,
    /// but its fragment is rejected by [`append`](Self::append).
    pub fn create<W: Widget + Default>(&self) -> RenderResult<W> {
        self.check_open("create")?;
        Ok(W::default())
    }

    /// Create a fresh widget of a kind chosen at runtime.
    pub fn widget(&self, kind: WidgetKind) -> RenderResult<Box<dyn Widget>> {
        self.check_open("widget")?;
        Ok(kind.create())
    }

    /// Append a rendered fragment to the envelope. Fails after sending.
    pub fn append(&mut self, fragment: &Fragment) -> RenderResult<()> {
        self.envelope.append(fragment)?;
        self.timing.mark_once("first_append");
        Ok(())
    }

    /// Attach an extra data field to the envelope.
    pub fn insert(&mut self, key: &str, value: impl Serialize) -> RenderResult<()> {
        self.envelope.insert(key, value)
    }

    /// Terminal transmission. Allowed exactly once.
    pub fn send<R: Responder>(&mut self, responder: R) -> RenderResult<Response> {
        let response = self.envelope.send(responder)?;
        self.timing.mark("sent");
        debug!(
            view = self.view,
            request_id = %self.request_id,
            status = response.status.as_u16(),
            bytes = response.body.len(),
            elapsed_ms = self.timing.elapsed().as_millis() as u64,
            "view sent"
        );
        Ok(response)
    }

    fn check_open(&self, operation: &'static str) -> RenderResult<()> {
        if self.state().is_sent() {
            warn!(
                view = self.view,
                request_id = %self.request_id,
                operation,
                "view already sent"
            );
            return Err(RenderError::AlreadySent);
        }
        Ok(())
    }
}
