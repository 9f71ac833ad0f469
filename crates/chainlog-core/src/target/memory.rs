//! In-memory target

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::traits::LogTarget;

/// In-memory target for testing
///
/// Can be told to fail writes or to hold each write for a while, which makes
/// ordering and fault handling easy to observe.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    contents: Mutex<Vec<u8>>,
    fail_with: Mutex<Option<std::io::ErrorKind>>,
    delay: Mutex<Option<Duration>>,
    attempts: Mutex<u64>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail with `kind`, or succeed again with `None`
    pub fn set_failure(&self, kind: Option<std::io::ErrorKind>) {
        *self.fail_with.lock() = kind;
    }

    /// Hold every following write for `delay` before it lands
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock() = delay;
    }

    /// Everything written so far, as text
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.contents.lock()).into_owned()
    }

    /// Number of `append` calls so far, including failed ones
    pub fn attempts(&self) -> u64 {
        *self.attempts.lock()
    }
}

#[async_trait]
impl LogTarget for MemoryTarget {
    fn name(&self) -> &str {
        "memory"
    }

    async fn append(&self, buffer: &[u8]) -> std::io::Result<()> {
        *self.attempts.lock() += 1;

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = *self.fail_with.lock();
        if let Some(kind) = failure {
            return Err(std::io::Error::new(kind, "memory target write failed"));
        }

        self.contents.lock().extend_from_slice(buffer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_target() {
        let target = MemoryTarget::new();
        target.append(b"hello\n").await.unwrap();
        assert_eq!(target.contents(), "hello\n");

        target.set_failure(Some(std::io::ErrorKind::PermissionDenied));
        let err = target.append(b"lost\n").await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied);

        target.set_failure(None);
        target.append(b"again\n").await.unwrap();
        assert_eq!(target.contents(), "hello\nagain\n");
        assert_eq!(target.attempts(), 3);
    }
}
