//! Cancellable one-shot timers for Roomgate.
//!
//! A [`TimerQueue`] schedules delayed events for a single owner (the screen
//! actor). Each scheduled timer runs as a small Tokio task that sleeps and
//! then delivers a [`Fired`] event on the queue's channel. The owner keeps
//! the returned [`TimerHandle`] and can cancel it at any time.
//!
//! # Cancellation contract
//!
//! Cancelling is idempotent and safe on a timer that already fired. A timer
//! that fired *before* it was cancelled may still have its event sitting in
//! the channel, so the owner must pass every received event through
//! [`TimerQueue::acknowledge`], which reports `false` for anything that was
//! cancelled in the meantime:
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         Some(fired) = timer_rx.recv() => {
//!             if !timers.acknowledge(&fired) {
//!                 continue; // stale
//!             }
//!             handle_timer(fired.event);
//!         }
//!     }
//! }
//! ```
//!
//! Every timer task also watches a shutdown [`CancellationToken`]; once the
//! token is cancelled no further events are delivered.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{trace, warn};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Delays used by the placeholder animation and the regeneration loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between two revealed characters, in milliseconds.
    pub animate_step_ms: u64,
    /// Delay between two generated room names, in milliseconds.
    pub regenerate_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            animate_step_ms: 70,
            regenerate_interval_ms: 10_000,
        }
    }
}

impl TimingConfig {
    /// Smallest accepted delay for either timer.
    pub const MIN_DELAY_MS: u64 = 1;

    /// Clamp zero delays up to [`Self::MIN_DELAY_MS`].
    ///
    /// A zero regeneration interval would turn the self-chaining loop into
    /// a busy loop.
    pub fn validated(mut self) -> Self {
        if self.animate_step_ms < Self::MIN_DELAY_MS {
            warn!(value = self.animate_step_ms, "animate_step_ms too small, clamping");
            self.animate_step_ms = Self::MIN_DELAY_MS;
        }
        if self.regenerate_interval_ms < Self::MIN_DELAY_MS {
            warn!(
                value = self.regenerate_interval_ms,
                "regenerate_interval_ms too small, clamping"
            );
            self.regenerate_interval_ms = Self::MIN_DELAY_MS;
        }
        self
    }

    /// Delay between revealed characters.
    pub fn animate_step(&self) -> Duration {
        Duration::from_millis(self.animate_step_ms)
    }

    /// Delay between regeneration ticks.
    pub fn regenerate_interval(&self) -> Duration {
        Duration::from_millis(self.regenerate_interval_ms)
    }
}

// ---------------------------------------------------------------------------
// Handles and events
// ---------------------------------------------------------------------------

/// Opaque identifier of one scheduled timer.
///
/// Handles are never reused within a queue, so comparing a fired handle
/// against a stored one is enough to tell a current timer from a stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Returns the underlying sequence number.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// A timer that elapsed, as delivered on the queue's channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    /// The handle returned by [`TimerQueue::schedule`].
    pub handle: TimerHandle,
    /// The event passed to [`TimerQueue::schedule`].
    pub event: E,
}

// ---------------------------------------------------------------------------
// Queue
// ---------------------------------------------------------------------------

/// Schedules delayed events and tracks which ones are still pending.
pub struct TimerQueue<E> {
    sender: mpsc::UnboundedSender<Fired<E>>,
    /// Timers that were scheduled and neither cancelled nor acknowledged.
    pending: HashMap<TimerHandle, JoinHandle<()>>,
    next_id: u64,
    shutdown: CancellationToken,
}

impl<E: Send + 'static> TimerQueue<E> {
    /// Creates a queue and the receiver its events are delivered on.
    ///
    /// Timer tasks stop without delivering once `shutdown` is cancelled.
    pub fn new(shutdown: CancellationToken) -> (Self, mpsc::UnboundedReceiver<Fired<E>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let queue = Self {
            sender,
            pending: HashMap::new(),
            next_id: 0,
            shutdown,
        };
        (queue, receiver)
    }

    /// Schedules `event` to be delivered after `delay`.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        let sender = self.sender.clone();
        let shutdown = self.shutdown.clone();

        let task = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if !shutdown.is_cancelled() {
                        let _ = sender.send(Fired { handle, event });
                    }
                }
            }
        });

        self.pending.insert(handle, task);
        trace!(%handle, delay_ms = delay.as_millis() as u64, "timer scheduled");
        handle
    }

    /// Cancels a timer. Returns `true` if it was still pending.
    ///
    /// Calling this on an unknown, already cancelled, or already
    /// acknowledged handle is a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.remove(&handle) {
            Some(task) => {
                task.abort();
                trace!(%handle, "timer cancelled");
                true
            }
            None => false,
        }
    }

    /// Marks a fired timer as consumed.
    ///
    /// Returns `false` if the timer was cancelled after it fired, in which
    /// case the owner must ignore the event.
    pub fn acknowledge(&mut self, fired: &Fired<E>) -> bool {
        let current = self.pending.remove(&fired.handle).is_some();
        if !current {
            trace!(handle = %fired.handle, "stale timer event dropped");
        }
        current
    }

    /// Whether `handle` is scheduled and not yet cancelled or acknowledged.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    /// Number of timers still pending.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Cancels every pending timer. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        for (_, task) in self.pending.drain() {
            task.abort();
        }
        if count > 0 {
            trace!(count, "all timers cancelled");
        }
        count
    }
}

impl<E> Drop for TimerQueue<E> {
    fn drop(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }
}

impl<E> fmt::Debug for TimerQueue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.pending.len())
            .field("next_id", &self.next_id)
            .field("shutdown", &self.shutdown.is_cancelled())
            .finish()
    }
}
