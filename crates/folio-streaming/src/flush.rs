//! Explicit flush control for chunked output.

use folio_core::StreamingConfig;

/// When the chunked responder flushes the underlying channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushPolicy {
    /// Flush after every chunk.
    #[default]
    EachChunk,
    /// Flush once at least `max_bytes` are pending.
    Buffered { max_bytes: usize },
    /// Flush only when asked to, and on finish.
    Manual,
}

impl FlushPolicy {
    /// Derive the policy from the `[streaming]` settings.
    pub fn from_config(config: &StreamingConfig) -> Self {
        if config.flush_each_chunk || config.max_buffer_bytes == 0 {
            Self::EachChunk
        } else {
            Self::Buffered {
                max_bytes: config.max_buffer_bytes,
            }
        }
    }
}

/// Controller for managing flush behavior.
#[derive(Debug, Default)]
pub struct FlushController {
    policy: FlushPolicy,
    pending_bytes: usize,
}

impl FlushController {
    /// Create a new flush controller with given policy.
    pub fn new(policy: FlushPolicy) -> Self {
        Self {
            policy,
            pending_bytes: 0,
        }
    }

    /// Record bytes written but not yet flushed.
    pub fn add_bytes(&mut self, count: usize) {
        self.pending_bytes += count;
    }

    /// Check if flush is needed.
    pub fn should_flush(&self) -> bool {
        match self.policy {
            FlushPolicy::EachChunk => true,
            FlushPolicy::Buffered { max_bytes } => self.pending_bytes >= max_bytes,
            FlushPolicy::Manual => false,
        }
    }

    /// Reset pending byte count after flush.
    pub fn reset(&mut self) {
        self.pending_bytes = 0;
    }

    pub fn pending_bytes(&self) -> usize {
        self.pending_bytes
    }

    /// Get current policy.
    pub fn policy(&self) -> FlushPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_config() {
        let mut config = StreamingConfig::default();
        assert_eq!(FlushPolicy::from_config(&config), FlushPolicy::EachChunk);

        config.flush_each_chunk = false;
        config.max_buffer_bytes = 16;
        assert_eq!(
            FlushPolicy::from_config(&config),
            FlushPolicy::Buffered { max_bytes: 16 }
        );

        config.max_buffer_bytes = 0;
        assert_eq!(FlushPolicy::from_config(&config), FlushPolicy::EachChunk);
    }

    #[test]
    fn test_buffered_threshold() {
        let mut controller = FlushController::new(FlushPolicy::Buffered { max_bytes: 10 });
        controller.add_bytes(4);
        assert!(!controller.should_flush());
        controller.add_bytes(6);
        assert!(controller.should_flush());
        controller.reset();
        assert_eq!(controller.pending_bytes(), 0);
    }

    #[test]
    fn test_manual_never_flushes() {
        let mut controller = FlushController::new(FlushPolicy::Manual);
        controller.add_bytes(1 << 20);
        assert!(!controller.should_flush());
    }
}
