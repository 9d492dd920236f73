//! Periodic regeneration of the placeholder room name.
//!
//! Each tick schedules the next one only after it has finished, so a slow
//! tick delays the loop instead of stacking ticks on top of each other.

use std::time::Duration;

use roomgate_names::{RoomName, RoomNameGenerator};
use roomgate_timer::{TimerHandle, TimerQueue};
use tracing::{debug, trace};

use crate::{AnimationScheduler, ScreenState, ScreenTimer};

/// Self-rescheduling loop feeding new names into the animation.
#[derive(Debug)]
pub struct RegenerationLoop {
    interval: Duration,
    generator: RoomNameGenerator,
    ticks: u64,
}

impl RegenerationLoop {
    pub fn new(interval: Duration, generator: RoomNameGenerator) -> Self {
        Self {
            interval,
            generator,
            ticks: 0,
        }
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Generates a new name, restarts the reveal on it, and schedules the
    /// next tick.
    pub fn tick(
        &mut self,
        state: &mut ScreenState,
        animation: &mut AnimationScheduler,
        timers: &mut TimerQueue<ScreenTimer>,
    ) -> RoomName {
        let name = self.generator.generate();

        if let Some(handle) = state.animate_timer.take() {
            timers.cancel(handle);
        }
        if let Some(handle) = state.regenerate_timer.take() {
            timers.cancel(handle);
        }

        state.generated_room_name = name.to_string();
        animation.start(name.as_str(), state, timers);
        state.regenerate_timer = Some(timers.schedule(self.interval, ScreenTimer::Regenerate));

        self.ticks += 1;
        debug!(tick = self.ticks, room = %name, "room name regenerated");
        name
    }

    /// Runs a tick for a fired regenerate timer.
    ///
    /// Returns `false` if `handle` is not the stored regenerate timer.
    pub fn on_fired(
        &mut self,
        handle: TimerHandle,
        state: &mut ScreenState,
        animation: &mut AnimationScheduler,
        timers: &mut TimerQueue<ScreenTimer>,
    ) -> bool {
        if state.regenerate_timer != Some(handle) {
            trace!(%handle, "ignoring superseded regeneration tick");
            return false;
        }
        state.regenerate_timer = None;
        self.tick(state, animation, timers);
        true
    }
}
