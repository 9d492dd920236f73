//! Liveness guard shared by the screen and its background tasks.

use roomgate_timer::TimerQueue;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{ScreenState, ScreenTimer};

/// Tracks whether the screen is still alive.
///
/// Every asynchronous continuation (timer tasks, the lookup, the
/// navigation) holds a clone and checks [`is_alive`](Self::is_alive)
/// before delivering its result. Once torn down, a guard never comes back.
#[derive(Debug, Clone, Default)]
pub struct LifecycleGuard {
    token: CancellationToken,
}

impl LifecycleGuard {
    /// Creates a live guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` from creation until [`teardown`](Self::teardown).
    pub fn is_alive(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Resolves once the screen has been torn down.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }

    /// A token cancelled together with this guard, for timer queues.
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// Cancels both stored timers and every other pending timer, then
    /// marks the screen dead.
    ///
    /// Returns `false` if the screen was already torn down.
    pub fn teardown(
        &self,
        state: &mut ScreenState,
        timers: &mut TimerQueue<ScreenTimer>,
    ) -> bool {
        if let Some(handle) = state.animate_timer.take() {
            timers.cancel(handle);
        }
        if let Some(handle) = state.regenerate_timer.take() {
            timers.cancel(handle);
        }
        timers.cancel_all();

        if self.token.is_cancelled() {
            return false;
        }
        self.token.cancel();
        debug!("lifecycle guard torn down");
        true
    }
}
