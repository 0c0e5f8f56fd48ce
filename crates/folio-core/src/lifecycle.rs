//! View lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Lifecycle state of one view invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Freshly dispatched, nothing produced yet.
    #[default]
    Idle,
    /// Fragments or data have been added to the envelope.
    Accumulating,
    /// Terminal transmission done.
    Sent,
}

impl ViewState {
    /// Check if further output may be added.
    pub fn can_accumulate(&self) -> bool {
        !self.is_sent()
    }

    /// Check if the terminal transmission happened.
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Accumulating => "accumulating",
            Self::Sent => "sent",
        }
    }
}

/// Timing context for observability.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Record a mark only the first time it is seen.
    pub fn mark_once(&mut self, name: &str) {
        self.marks
            .entry(name.to_string())
            .or_insert_with(Instant::now);
    }

    /// Check whether a mark exists.
    pub fn has_mark(&self, name: &str) -> bool {
        self.marks.contains_key(name)
    }

    /// Get elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time from start to a named mark.
    pub fn since_start(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).map(|t| t.duration_since(self.start))
    }

    /// Get time to the terminal transmission.
    pub fn time_to_send(&self) -> Option<Duration> {
        self.since_start("sent")
    }

    /// Get time to the first streamed chunk.
    pub fn time_to_first_chunk(&self) -> Option<Duration> {
        self.since_start("first_chunk")
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state() {
        assert_eq!(ViewState::default(), ViewState::Idle);
        assert!(ViewState::Idle.can_accumulate());
        assert!(ViewState::Accumulating.can_accumulate());
        assert!(!ViewState::Sent.can_accumulate());
        assert!(ViewState::Sent.is_sent());
    }

    #[test]
    fn test_timing_marks() {
        let mut timing = TimingContext::new();
        assert!(timing.time_to_send().is_none());

        timing.mark_once("first_chunk");
        let first = timing.time_to_first_chunk().unwrap();
        timing.mark_once("first_chunk");
        assert_eq!(timing.time_to_first_chunk().unwrap(), first);

        timing.mark("sent");
        assert!(timing.has_mark("sent"));
        assert!(timing.time_to_send().unwrap() <= timing.elapsed());
    }
}
