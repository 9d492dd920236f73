//! The user-triggered join: resolve the room, then navigate into it.
//!
//! ```text
//!         begin()                     on_resolved(Ok(Resolved))
//!   Idle ────────→ Resolving ───────────────────────────────→ Navigating
//!    ↑                 │  rejected / network error / no room_url     │
//!    ├─────────────────┘                                             │
//!    └────────────────────── on_navigation_settled() ───────────────┘
//! ```
//!
//! The workflow itself never awaits anything. The screen actor runs the
//! lookup and the navigation in background tasks and feeds their results
//! back in through `on_resolved` and `on_navigation_settled`.

use std::sync::Arc;

use roomgate_resolve::{Resolution, ResolveError, ResolveRequest, ResolvedRoom};
use roomgate_timer::TimerQueue;
use tracing::{debug, info, warn};

use crate::collab::{Sinks, TITLE_KEY, WelcomePageEvent};
use crate::{
    AnimationScheduler, JoinError, NavigationError, ScreenState, ScreenTimer, Settings, StoreError,
};

/// Where the join workflow currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinPhase {
    Idle,
    /// A lookup for `target` is in flight.
    Resolving { target: String, generated: bool },
    /// Navigation to `room_url` is in flight.
    Navigating { room_url: String },
}

/// Outcome of [`JoinWorkflow::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinStart {
    /// Send this request to the resolver.
    Lookup(ResolveRequest),
    /// A join is already in flight; the trigger was dropped.
    Ignored,
    /// The join failed before reaching the network.
    Rejected(JoinError),
}

/// What a caller of [`ScreenHandle::join`](crate::ScreenHandle::join) learns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinTrigger {
    /// A lookup was started.
    Started,
    /// Another join was still in flight.
    Ignored,
    /// Nothing to join; `error_msg` says why.
    Rejected,
}

impl From<&JoinStart> for JoinTrigger {
    fn from(start: &JoinStart) -> Self {
        match start {
            JoinStart::Lookup(_) => Self::Started,
            JoinStart::Ignored => Self::Ignored,
            JoinStart::Rejected(_) => Self::Rejected,
        }
    }
}

/// Orchestrates one join at a time.
#[derive(Debug)]
pub struct JoinWorkflow {
    device_id: String,
    phase: JoinPhase,
}

impl JoinWorkflow {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            phase: JoinPhase::Idle,
        }
    }

    pub fn phase(&self) -> &JoinPhase {
        &self.phase
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self.phase, JoinPhase::Resolving { .. })
    }

    /// Whether a lookup or a navigation is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase != JoinPhase::Idle
    }

    /// Picks the target and builds the lookup request.
    ///
    /// A trigger while busy is ignored.
    pub fn begin(&mut self, state: &mut ScreenState, settings: &Settings) -> JoinStart {
        if self.is_busy() {
            debug!(phase = ?self.phase, "join already in flight, ignoring trigger");
            return JoinStart::Ignored;
        }

        let target = state.join_target().to_string();
        if target.is_empty() {
            let err = JoinError::EmptyRoom;
            state.error_msg = err.user_message().unwrap_or_default();
            debug!("join triggered with no room name");
            return JoinStart::Rejected(err);
        }

        let display_name = settings
            .display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.device_id)
            .to_string();

        let generated = state.target_is_generated();
        info!(room = %target, generated, "join started");
        self.phase = JoinPhase::Resolving {
            target: target.clone(),
            generated,
        };

        JoinStart::Lookup(ResolveRequest {
            meeting_id: target,
            device_id: self.device_id.clone(),
            display_name,
        })
    }

    /// Applies the lookup result.
    ///
    /// Returns the room to navigate to, if any.
    pub fn on_resolved(
        &mut self,
        result: Result<Resolution, ResolveError>,
        state: &mut ScreenState,
        animation: &mut AnimationScheduler,
        timers: &mut TimerQueue<ScreenTimer>,
        sinks: &Sinks,
    ) -> Option<String> {
        let (target, generated) = match &self.phase {
            JoinPhase::Resolving { target, generated } => (target.clone(), *generated),
            other => {
                warn!(phase = ?other, "lookup result without a pending lookup, ignoring");
                return None;
            }
        };
        self.phase = JoinPhase::Idle;

        match result {
            Err(e) => {
                warn!(room = %target, error = %e, "room lookup failed");
                let err = JoinError::Network(e);
                state.error_msg = err.user_message().unwrap_or_default();
                state.joining = false;
                None
            }
            Ok(Resolution::Rejected { description }) => {
                info!(room = %target, %description, "room rejected");
                let err = JoinError::Validation(description);
                state.error_msg = err.user_message().unwrap_or_default();
                None
            }
            Ok(Resolution::Resolved(room)) => {
                self.apply_resolved(room, generated, state, animation, timers, sinks)
            }
        }
    }

    fn apply_resolved(
        &mut self,
        room: ResolvedRoom,
        generated: bool,
        state: &mut ScreenState,
        animation: &mut AnimationScheduler,
        timers: &mut TimerQueue<ScreenTimer>,
        sinks: &Sinks,
    ) -> Option<String> {
        let ResolvedRoom { title, room_url } = room;
        info!(%title, %room_url, "room resolved");

        animation.start(&title, state, timers);
        state.generated_room_name.clone_from(&title);
        state.room.clone_from(&room_url);
        state.error_msg.clear();

        persist_title(sinks, &title);

        sinks.analytics.send(WelcomePageEvent::JoinClicked {
            is_generated: generated,
            room_url: room_url.clone(),
        });

        if room_url.is_empty() {
            debug!("resolved room has no url, not navigating");
            return None;
        }

        state.joining = true;
        self.phase = JoinPhase::Navigating {
            room_url: room_url.clone(),
        };
        Some(room_url)
    }

    /// Applies navigation settlement. Failure is logged, never shown.
    pub fn on_navigation_settled(
        &mut self,
        result: Result<(), NavigationError>,
        state: &mut ScreenState,
    ) {
        let room_url = match &self.phase {
            JoinPhase::Navigating { room_url } => room_url.clone(),
            other => {
                warn!(phase = ?other, "navigation settled without a pending navigation");
                return;
            }
        };
        self.phase = JoinPhase::Idle;

        match result {
            Ok(()) => info!(%room_url, "navigation settled"),
            Err(e) => warn!(%room_url, error = %JoinError::Navigation(e), "navigation failed"),
        }
        state.joining = false;
    }
}

/// Stores the title on the blocking pool so slow stores never stall the
/// actor. Failures are logged only.
fn persist_title(sinks: &Sinks, title: &str) {
    let encoded = match serde_json::to_string(title) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!(error = %StoreError::Encode(e.to_string()), "failed to encode room title");
            return;
        }
    };
    let store = Arc::clone(&sinks.store);
    tokio::task::spawn_blocking(move || {
        if let Err(e) = store.set_item(TITLE_KEY, &encoded) {
            warn!(error = %e, "failed to persist room title");
        }
    });
}
