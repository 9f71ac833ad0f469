//! File target

use std::fs::File;
use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;

use super::traits::LogTarget;

/// Appends to an already-open file
///
/// The target shares ownership of the file through an `Arc` and never
/// closes it explicitly. While the caller keeps its own clone the handle
/// stays open regardless of the logger; once the caller has dropped its
/// clone, the descriptor closes when the target (and the writer task holding
/// it) is dropped. Callers that need the descriptor to outlive the logger
/// keep a clone.
///
/// Writes run on tokio's blocking pool so `append` never stalls the
/// runtime's worker threads.
///
/// A handle that cannot be written to (for example a read-only handle or
/// one opened on a directory) is accepted here; every `append` then fails.
#[derive(Debug, Clone)]
pub struct FileTarget {
    file: Arc<File>,
}

impl FileTarget {
    pub fn new(file: Arc<File>) -> Self {
        Self { file }
    }

    /// The underlying file handle
    pub fn file(&self) -> &Arc<File> {
        &self.file
    }
}

#[async_trait]
impl LogTarget for FileTarget {
    fn name(&self) -> &str {
        "file"
    }

    async fn append(&self, buffer: &[u8]) -> std::io::Result<()> {
        let file = self.file.clone();
        let buffer = buffer.to_vec();

        tokio::task::spawn_blocking(move || {
            let mut handle: &File = &file;
            handle.write_all(&buffer)?;
            handle.flush()
        })
        .await
        .map_err(std::io::Error::other)?
    }
}
