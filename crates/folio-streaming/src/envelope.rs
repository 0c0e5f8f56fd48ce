//! Per-invocation output accumulator.

use std::mem;

use folio_core::{RenderError, RenderResult, ViewState};
use folio_widgets::Fragment;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::response::Response;

/// Key under which accumulated HTML is transmitted in JSON envelopes.
pub const HTML_KEY: &str = "html";

/// Everything a view produced, handed to the responder on send.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    /// Concatenated fragments, in append order.
    pub html: String,
    /// Extra data fields.
    pub fields: Map<String, Value>,
}

/// Terminal transmission strategy.
///
/// Consumed by the one call to [`Envelope::send`].
pub trait Responder {
    /// Turn the accumulated payload into a finished response.
    fn respond(self, payload: Payload) -> RenderResult<Response>;
}

/// Accumulates fragments and data fields until the single terminal send.
#[derive(Debug, Default)]
pub struct Envelope {
    state: ViewState,
    html: String,
    fields: Map<String, Value>,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Append a fragment to the HTML body.
    pub fn append(&mut self, fragment: &Fragment) -> RenderResult<()> {
        self.check_open("append")?;
        self.html.push_str(fragment.as_str());
        self.state = ViewState::Accumulating;
        Ok(())
    }

    /// Attach a data field; a repeated key replaces the earlier value.
    pub fn insert(&mut self, key: &str, value: impl Serialize) -> RenderResult<()> {
        self.check_open("insert")?;
        if key == HTML_KEY {
            return Err(RenderError::ReservedKey(key.to_string()));
        }
        let value = serde_json::to_value(value)?;
        self.fields.insert(key.to_string(), value);
        self.state = ViewState::Accumulating;
        Ok(())
    }

    /// HTML accumulated so far.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Data fields attached so far.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Transmit everything through `responder`. Allowed exactly once.
    pub fn send<R: Responder>(&mut self, responder: R) -> RenderResult<Response> {
        self.check_open("send")?;
        self.state = ViewState::Sent;

        let payload = Payload {
            html: mem::take(&mut self.html),
            fields: mem::take(&mut self.fields),
        };
        debug!(
            html_bytes = payload.html.len(),
            fields = payload.fields.len(),
            "sending envelope"
        );
        responder.respond(payload)
    }

    fn check_open(&self, operation: &'static str) -> RenderResult<()> {
        if self.state.is_sent() {
            warn!(operation, "envelope already sent");
            return Err(RenderError::AlreadySent);
        }
        Ok(())
    }
}
