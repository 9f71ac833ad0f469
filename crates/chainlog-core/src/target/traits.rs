//! Target trait definition

use std::sync::Arc;

use async_trait::async_trait;

/// Destination for formatted log buffers
///
/// The write queue calls `append` for one buffer at a time and waits for it
/// to finish before submitting the next, so implementations never see
/// overlapping calls from the same queue.
#[async_trait]
pub trait LogTarget: Send + Sync {
    /// Human-readable name of this target
    fn name(&self) -> &str;

    /// Append the whole buffer
    async fn append(&self, buffer: &[u8]) -> std::io::Result<()>;
}

/// Type alias for an Arc-wrapped target
pub type SharedTarget = Arc<dyn LogTarget>;
