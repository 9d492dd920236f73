//! Typewriter-style reveal of a name into the placeholder.
//!
//! ```text
//!         start(name)              last char revealed
//!   Idle ─────────────→ Revealing ───────────────────→ Idle
//!                         │   ↑
//!                         └───┘ step: append one char, reschedule
//! ```
//!
//! Calling `start` while revealing cancels the pending step and begins
//! again from an empty placeholder.

use std::time::Duration;

use roomgate_timer::{TimerHandle, TimerQueue};
use tracing::{debug, trace};

use crate::{ScreenState, ScreenTimer};

/// Whether a reveal is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Revealing,
}

/// Drives `room_placeholder` one character at a time.
#[derive(Debug)]
pub struct AnimationScheduler {
    step: Duration,
    phase: AnimationPhase,
    target: Vec<char>,
    revealed: usize,
}

impl AnimationScheduler {
    /// Creates an idle scheduler revealing one character per `step`.
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            phase: AnimationPhase::Idle,
            target: Vec::new(),
            revealed: 0,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_revealing(&self) -> bool {
        self.phase == AnimationPhase::Revealing
    }

    /// Starts revealing `name`, superseding any reveal in progress.
    pub fn start(
        &mut self,
        name: &str,
        state: &mut ScreenState,
        timers: &mut TimerQueue<ScreenTimer>,
    ) {
        if let Some(handle) = state.animate_timer.take() {
            timers.cancel(handle);
        }
        state.room_placeholder.clear();
        self.target = name.chars().collect();
        self.revealed = 0;

        if self.target.is_empty() {
            self.phase = AnimationPhase::Idle;
            return;
        }

        self.phase = AnimationPhase::Revealing;
        state.animate_timer = Some(timers.schedule(self.step, ScreenTimer::Animate));
        trace!(name, "reveal started");
    }

    /// Applies one reveal step for a fired animate timer.
    ///
    /// Returns `false` without touching state if `handle` is not the
    /// currently stored animate timer.
    pub fn on_step(
        &mut self,
        handle: TimerHandle,
        state: &mut ScreenState,
        timers: &mut TimerQueue<ScreenTimer>,
    ) -> bool {
        if state.animate_timer != Some(handle) || !self.is_revealing() {
            trace!(%handle, "ignoring superseded reveal step");
            return false;
        }
        state.animate_timer = None;

        let Some(&next) = self.target.get(self.revealed) else {
            self.phase = AnimationPhase::Idle;
            return false;
        };
        state.room_placeholder.push(next);
        self.revealed += 1;

        if self.revealed < self.target.len() {
            state.animate_timer = Some(timers.schedule(self.step, ScreenTimer::Animate));
        } else {
            self.phase = AnimationPhase::Idle;
            debug!(placeholder = %state.room_placeholder, "reveal complete");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use roomgate_timer::Fired;
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;

    use super::*;

    const STEP: Duration = Duration::from_millis(70);

    fn setup() -> (
        AnimationScheduler,
        ScreenState,
        TimerQueue<ScreenTimer>,
        mpsc::UnboundedReceiver<Fired<ScreenTimer>>,
    ) {
        let (timers, rx) = TimerQueue::new(CancellationToken::new());
        (AnimationScheduler::new(STEP), ScreenState::default(), timers, rx)
    }

    /// Feeds fired timers back until the reveal finishes; returns every
    /// placeholder value observed after an applied step.
    async fn drive(
        anim: &mut AnimationScheduler,
        state: &mut ScreenState,
        timers: &mut TimerQueue<ScreenTimer>,
        rx: &mut mpsc::UnboundedReceiver<Fired<ScreenTimer>>,
    ) -> Vec<String> {
        let mut seen = Vec::new();
        while anim.is_revealing() {
            let fired = rx.recv().await.unwrap();
            if !timers.acknowledge(&fired) {
                continue;
            }
            if anim.on_step(fired.handle, state, timers) {
                seen.push(state.room_placeholder.clone());
            }
        }
        seen
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveals_one_char_per_step() {
        let (mut anim, mut state, mut timers, mut rx) = setup();
        anim.start("Room", &mut state, &mut timers);
        assert_eq!(anim.phase(), AnimationPhase::Revealing);
        assert_eq!(state.room_placeholder, "");

        let seen = drive(&mut anim, &mut state, &mut timers, &mut rx).await;
        assert_eq!(seen, vec!["R", "Ro", "Roo", "Room"]);
        assert_eq!(anim.phase(), AnimationPhase::Idle);
        assert!(state.animate_timer.is_none());
        assert_eq!(timers.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_takes_one_step_per_char() {
        let (mut anim, mut state, mut timers, mut rx) = setup();
        let start = tokio::time::Instant::now();
        anim.start("abcde", &mut state, &mut timers);
        drive(&mut anim, &mut state, &mut timers, &mut rx).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= STEP * 5, "finished early: {elapsed:?}");
        assert!(elapsed < STEP * 6, "finished late: {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_supersedes_previous_reveal() {
        let (mut anim, mut state, mut timers, mut rx) = setup();
        anim.start("ABCDEFGH", &mut state, &mut timers);

        // Apply two steps of the first name.
        for _ in 0..2 {
            let fired = rx.recv().await.unwrap();
            assert!(timers.acknowledge(&fired));
            assert!(anim.on_step(fired.handle, &mut state, &mut timers));
        }
        assert_eq!(state.room_placeholder, "AB");

        anim.start("xyz", &mut state, &mut timers);
        assert_eq!(state.room_placeholder, "");

        let seen = drive(&mut anim, &mut state, &mut timers, &mut rx).await;
        assert_eq!(seen, vec!["x", "xy", "xyz"]);
        assert_eq!(state.room_placeholder, "xyz");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_step_after_restart_is_ignored() {
        let (mut anim, mut state, mut timers, mut rx) = setup();
        anim.start("first", &mut state, &mut timers);
        let old = state.animate_timer.unwrap();

        // The old timer fires and is queued before the restart lands.
        tokio::time::sleep(STEP + Duration::from_millis(1)).await;
        anim.start("second", &mut state, &mut timers);

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired.handle, old);
        assert!(!timers.acknowledge(&fired));
        assert!(!anim.on_step(fired.handle, &mut state, &mut timers));
        assert_eq!(state.room_placeholder, "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_name_stays_idle() {
        let (mut anim, mut state, mut timers, _rx) = setup();
        state.room_placeholder = "old".into();
        anim.start("", &mut state, &mut timers);
        assert_eq!(anim.phase(), AnimationPhase::Idle);
        assert_eq!(state.room_placeholder, "");
        assert!(state.animate_timer.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveals_unicode_titles_by_char() {
        let (mut anim, mut state, mut timers, mut rx) = setup();
        anim.start("Café ☕", &mut state, &mut timers);
        let seen = drive(&mut anim, &mut state, &mut timers, &mut rx).await;
        assert_eq!(seen.len(), 6);
        assert_eq!(seen.last().map(String::as_str), Some("Café ☕"));
    }
}
