//! Draining a sequence into a channel on a background thread.
//!
//! # Examples
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let channel = lazyseq::range(5).into_channel_buffered(2)?;
//! let received: Vec<_> = channel.collect();
//! assert_eq!(received, vec![0, 1, 2, 3, 4]);
//! # Ok::<(), lazyseq::Error>(())
//! ```
//!
//! # Cancellation
//!
//! The worker stops as soon as it notices the consumer is gone: either
//! [`Channel::cancel`] was called, or the [`Channel`] was dropped. A worker
//! draining an infinite sequence therefore never outlives its channel by
//! more than one element.

use std::fmt;
use std::panic;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self as cb, Receiver, RecvTimeoutError, Sender, TryRecvError};

use crate::{Error, Sequence};

const WORKER_NAME: &str = "lazyseq-channel";

/// The receiving side of a sequence drained on a background thread.
///
/// Elements arrive in the order the sequence produced them. The channel is
/// closed once the sequence is exhausted.
///
/// This `struct` is created by the [`into_channel`] and
/// [`into_channel_buffered`] functions. See their documentation for more.
pub struct Channel<T> {
    receiver: Receiver<T>,
    // Dropping the sender is the cancellation signal.
    cancel: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl<T> Channel<T> {
    /// Blocks until the next element arrives.
    ///
    /// Returns `None` once the sequence is exhausted and every element has
    /// been received.
    pub fn recv(&self) -> Option<T> {
        self.receiver.recv().ok()
    }

    /// Returns the next element if one is ready, without blocking.
    ///
    /// Returns `None` both when nothing is ready yet and when the channel is
    /// closed.
    pub fn try_recv(&self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Blocks until the next element arrives or `timeout` elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<T> {
        match self.receiver.recv_timeout(timeout) {
            Ok(item) => Some(item),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// The number of elements waiting to be received.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Whether no elements are waiting to be received.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// The underlying receiver, for use with `crossbeam::channel::select!`.
    pub fn receiver(&self) -> &Receiver<T> {
        &self.receiver
    }

    /// Stops the worker and waits for it to exit.
    ///
    /// Elements already buffered in the channel are dropped.
    ///
    /// # Panics
    ///
    /// Resumes the worker's panic if the sequence panicked while being
    /// drained.
    pub fn cancel(mut self) {
        drop(self.cancel.take());
        join_worker(self.worker.take());
    }

    /// Waits for the worker to exit once the channel has been drained.
    ///
    /// Elements not yet received are dropped, and the worker stops at its
    /// next send.
    ///
    /// # Panics
    ///
    /// Resumes the worker's panic if the sequence panicked while being
    /// drained.
    pub fn join(self) {
        let Self {
            receiver, worker, ..
        } = self;
        drop(receiver);
        join_worker(worker);
    }
}

fn join_worker(worker: Option<JoinHandle<()>>) {
    if let Some(worker) = worker {
        if let Err(payload) = worker.join() {
            panic::resume_unwind(payload);
        }
    }
}

impl<T> Iterator for Channel<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}

impl<T> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("len", &self.receiver.len())
            .field("capacity", &self.receiver.capacity())
            .field("cancelled", &self.cancel.is_none())
            .finish()
    }
}

/// Drains `seq` on a background thread into an unbuffered channel.
///
/// Every element is handed over synchronously: the worker waits for the
/// consumer to receive an element before pulling the next one.
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the worker thread cannot be started.
pub fn into_channel<S>(seq: S) -> Result<Channel<S::Item>, Error>
where
    S: Sequence + Send + 'static,
    S::Item: Send + 'static,
{
    into_channel_buffered(seq, 0)
}

/// Drains `seq` on a background thread into a channel holding up to
/// `capacity` elements.
///
/// A `capacity` of zero behaves like [`into_channel`].
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the worker thread cannot be started.
pub fn into_channel_buffered<S>(seq: S, capacity: usize) -> Result<Channel<S::Item>, Error>
where
    S: Sequence + Send + 'static,
    S::Item: Send + 'static,
{
    let (sender, receiver) = cb::bounded(capacity);
    let (cancel, cancelled) = cb::bounded::<()>(0);

    let worker = thread::Builder::new()
        .name(WORKER_NAME.into())
        .spawn(move || drain(seq, sender, cancelled))
        .map_err(Error::Spawn)?;
    tracing::debug!(capacity, "spawned channel worker");

    Ok(Channel {
        receiver,
        cancel: Some(cancel),
        worker: Some(worker),
    })
}

fn drain<S: Sequence>(mut seq: S, sender: Sender<S::Item>, cancelled: Receiver<()>) {
    let mut sent = 0usize;
    loop {
        if let Err(TryRecvError::Disconnected) = cancelled.try_recv() {
            tracing::debug!(sent, "channel worker cancelled");
            return;
        }
        let Some(item) = seq.next() else {
            tracing::debug!(sent, "sequence exhausted, closing channel");
            return;
        };
        crossbeam::channel::select! {
            send(sender, item) -> res => {
                if res.is_err() {
                    tracing::debug!(sent, "receiver dropped, stopping channel worker");
                    return;
                }
                sent += 1;
                tracing::trace!(sent, "sent element");
            }
            recv(cancelled) -> _ => {
                tracing::debug!(sent, "channel worker cancelled");
                return;
            }
        }
    }
}
