//! Ordered asynchronous write queue
//!
//! `enqueue` never waits on I/O: it tags the buffer with the next sequence
//! number and hands it to a single writer task over an unbounded channel.
//! The writer appends buffers one at a time, so they land in exactly the
//! order they were enqueued.
//!
//! Wait handles travel through the same channel as drain markers. When the
//! writer reaches a marker, every write enqueued before the handle was taken
//! has finished, and the marker is answered with the earliest failure the
//! writer still holds.
//!
//! A failure is held until a marker has reported it and another write has
//! been enqueued after that marker. Every handle taken before that point
//! covers the failed write and rejects; handles taken later only cover
//! newer writes and resolve once those succeed.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};

use crate::diagnostics::{NoOpDiagnostics, SharedDiagnostics};
use crate::error::{LogError, LogResult};
use crate::target::SharedTarget;
use crate::{diag_debug, diag_error, diag_warn};

/// Observable state of a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueStatus {
    /// No outstanding writes
    Idle,
    /// At least one write outstanding, no unreported failure held
    Draining,
    /// At least one write outstanding and a failure is held
    Faulted,
}

/// A formatted buffer waiting for the writer
struct PendingWrite {
    sequence: u64,
    buffer: Vec<u8>,
}

enum Command {
    Write(PendingWrite),
    Drain(oneshot::Sender<LogResult<()>>),
}

/// Counters shared between the queue and its writer task
#[derive(Debug, Default)]
struct QueueState {
    completed: AtomicU64,
    faulted: AtomicBool,
}

/// Serializes writes to one target
pub struct WriteQueue {
    sender: mpsc::UnboundedSender<Command>,
    /// Last sequence number handed out; the lock also keeps channel order
    /// identical to sequence order
    enqueued: Mutex<u64>,
    state: Arc<QueueState>,
    target_name: String,
    diagnostics: SharedDiagnostics,
}

impl WriteQueue {
    /// Spawn the writer task for `target` on the current tokio runtime
    pub fn spawn(target: SharedTarget) -> LogResult<Self> {
        Self::spawn_with_diagnostics(target, Arc::new(NoOpDiagnostics::new()))
    }

    /// Spawn the writer task, reporting its activity to `diagnostics`
    pub fn spawn_with_diagnostics(
        target: SharedTarget,
        diagnostics: SharedDiagnostics,
    ) -> LogResult<Self> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| LogError::NoRuntime)?;

        let (sender, receiver) = mpsc::unbounded_channel();
        let state = Arc::new(QueueState::default());
        let target_name = target.name().to_string();

        runtime.spawn(writer_loop(
            receiver,
            target,
            state.clone(),
            diagnostics.clone(),
        ));
        diag_debug!(diagnostics, "started writer for {} target", target_name);

        Ok(Self {
            sender,
            enqueued: Mutex::new(0),
            state,
            target_name,
            diagnostics,
        })
    }

    /// Queue a buffer for writing and return its sequence number
    ///
    /// Returns immediately. The outcome is only observable through
    /// `wait_handle`.
    pub fn enqueue(&self, buffer: Vec<u8>) -> u64 {
        let mut enqueued = self.enqueued.lock();
        let sequence = *enqueued + 1;
        *enqueued = sequence;

        let write = PendingWrite { sequence, buffer };

        if self.sender.send(Command::Write(write)).is_err() {
            diag_error!(
                self.diagnostics,
                "{} writer is gone, dropping write #{}",
                self.target_name,
                sequence
            );
        }
        sequence
    }

    /// A handle that settles once every write enqueued so far has finished
    pub fn wait_handle(&self) -> WaitHandle {
        let (reply, receiver) = oneshot::channel();

        let enqueued = self.enqueued.lock();
        // On failure the reply sender is dropped with the command and the
        // handle settles with `WriterClosed`.
        let _ = self.sender.send(Command::Drain(reply));
        drop(enqueued);

        WaitHandle::new(receiver)
    }

    /// Number of writes enqueued so far
    pub fn enqueued(&self) -> u64 {
        *self.enqueued.lock()
    }

    /// Number of writes finished so far, successfully or not
    pub fn completed(&self) -> u64 {
        self.state.completed.load(Ordering::SeqCst)
    }

    /// Writes enqueued but not yet finished
    pub fn outstanding(&self) -> u64 {
        self.enqueued().saturating_sub(self.completed())
    }

    pub fn status(&self) -> QueueStatus {
        if self.outstanding() == 0 {
            QueueStatus::Idle
        } else if self.state.faulted.load(Ordering::SeqCst) {
            QueueStatus::Faulted
        } else {
            QueueStatus::Draining
        }
    }

    /// Name of the target this queue writes to
    pub fn target_name(&self) -> &str {
        &self.target_name
    }
}

impl std::fmt::Debug for WriteQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteQueue")
            .field("target", &self.target_name)
            .field("enqueued", &self.enqueued())
            .field("completed", &self.completed())
            .field("status", &self.status())
            .finish()
    }
}

async fn writer_loop(
    mut receiver: mpsc::UnboundedReceiver<Command>,
    target: SharedTarget,
    state: Arc<QueueState>,
    diagnostics: SharedDiagnostics,
) {
    let mut first_error: Option<LogError> = None;
    // Set once a drain marker has handed `first_error` out
    let mut reported = false;

    while let Some(command) = receiver.recv().await {
        match command {
            Command::Write(write) => {
                if reported {
                    first_error = None;
                    reported = false;
                    state.faulted.store(false, Ordering::SeqCst);
                }

                if let Err(err) = target.append(&write.buffer).await {
                    diag_warn!(
                        diagnostics,
                        "write #{} to {} target failed: {}",
                        write.sequence,
                        target.name(),
                        err
                    );
                    if first_error.is_none() {
                        first_error = Some(LogError::write(write.sequence, err));
                        state.faulted.store(true, Ordering::SeqCst);
                    }
                }

                state.completed.store(write.sequence, Ordering::SeqCst);
            }
            Command::Drain(reply) => {
                let outcome = match &first_error {
                    Some(err) => {
                        reported = true;
                        Err(err.clone())
                    }
                    None => Ok(()),
                };
                // Nobody listening is fine; the handle was dropped
                let _ = reply.send(outcome);
            }
        }
    }

    diag_debug!(diagnostics, "writer for {} target stopped", target.name());
}

/// Completion token for the writes enqueued before it was taken
///
/// Await it directly. Clones share one outcome, so several consumers can
/// each observe the same failure.
#[derive(Clone)]
pub struct WaitHandle {
    inner: Shared<BoxFuture<'static, LogResult<()>>>,
}

impl WaitHandle {
    fn new(receiver: oneshot::Receiver<LogResult<()>>) -> Self {
        let inner = async move {
            match receiver.await {
                Ok(outcome) => outcome,
                Err(_) => Err(LogError::WriterClosed),
            }
        }
        .boxed()
        .shared();

        Self { inner }
    }

    /// Wait for the covered writes
    pub async fn wait(self) -> LogResult<()> {
        self.await
    }
}

impl Future for WaitHandle {
    type Output = LogResult<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}

impl std::fmt::Debug for WaitHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitHandle").finish_non_exhaustive()
    }
}
