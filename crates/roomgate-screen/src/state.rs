//! Screen state, external inputs, and the snapshots observers see.

use roomgate_timer::TimerHandle;
use serde::{Deserialize, Serialize};

/// Events carried by the screen's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTimer {
    /// Reveal the next placeholder character.
    Animate,
    /// Generate a new room name.
    Regenerate,
}

// ---------------------------------------------------------------------------
// ScreenState
// ---------------------------------------------------------------------------

/// The mutable state of one room-selection screen.
///
/// Owned by exactly one screen actor. Invariants:
///
/// - at most one animate timer and one regenerate timer are stored;
///   whoever replaces a handle cancels the old one first
/// - `room` wins over `generated_room_name` as the join target whenever
///   it is non-empty
/// - `joining` is only true while a navigation is in flight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    /// Typed or server-resolved room; empty when unset.
    pub room: String,
    /// Latest machine-generated candidate name.
    pub generated_room_name: String,
    /// Currently revealed prefix of the animated name.
    pub room_placeholder: String,
    /// A navigation attempt is in flight.
    pub joining: bool,
    /// Last error to display; empty when none.
    pub error_msg: String,
    /// Pending character-reveal timer.
    pub animate_timer: Option<TimerHandle>,
    /// Pending regeneration timer.
    pub regenerate_timer: Option<TimerHandle>,
}

impl ScreenState {
    /// The room a join attempt should target.
    pub fn join_target(&self) -> &str {
        if self.room.is_empty() {
            &self.generated_room_name
        } else {
            &self.room
        }
    }

    /// Whether [`join_target`](Self::join_target) is the generated name.
    pub fn target_is_generated(&self) -> bool {
        self.room.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// User settings the screen reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name to appear under in the conference.
    pub display_name: Option<String>,
}

/// Read-only inputs from the rest of the application.
///
/// The feature flags are not interpreted here; they are carried into every
/// snapshot for the view layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenInputs {
    /// Whether calendar integration is enabled.
    pub calendar_enabled: bool,
    /// Whether the recent-rooms list is enabled.
    pub recent_list_enabled: bool,
    /// Room of the current conference, if any. Empty when none.
    pub room: String,
    /// Current user settings.
    pub settings: Settings,
}

/// Recomputes state from the inputs.
///
/// A non-empty external room replaces the local one; otherwise the
/// previous state is kept as is. The actor applies this after every
/// change, not only when the inputs change.
pub fn derive_state(inputs: &ScreenInputs, previous: &ScreenState) -> ScreenState {
    let mut next = previous.clone();
    if !inputs.room.is_empty() {
        next.room.clone_from(&inputs.room);
    }
    next
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// An immutable view of the screen, published after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScreenSnapshot {
    pub room: String,
    pub generated_room_name: String,
    pub room_placeholder: String,
    pub joining: bool,
    pub error_msg: String,
    /// A room lookup is in flight.
    pub resolving: bool,
    /// The placeholder is still being revealed.
    pub animating: bool,
    /// Number of names the regeneration loop has produced.
    pub regenerations: u64,
    pub calendar_enabled: bool,
    pub recent_list_enabled: bool,
    pub settings: Settings,
}

impl ScreenSnapshot {
    pub(crate) fn capture(
        state: &ScreenState,
        inputs: &ScreenInputs,
        resolving: bool,
        animating: bool,
        regenerations: u64,
    ) -> Self {
        Self {
            room: state.room.clone(),
            generated_room_name: state.generated_room_name.clone(),
            room_placeholder: state.room_placeholder.clone(),
            joining: state.joining,
            error_msg: state.error_msg.clone(),
            resolving,
            animating,
            regenerations,
            calendar_enabled: inputs.calendar_enabled,
            recent_list_enabled: inputs.recent_list_enabled,
            settings: inputs.settings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_target_prefers_room() {
        let state = ScreenState {
            room: "typed".into(),
            generated_room_name: "Generated".into(),
            ..ScreenState::default()
        };
        assert_eq!(state.join_target(), "typed");
        assert!(!state.target_is_generated());
    }

    #[test]
    fn test_join_target_falls_back_to_generated() {
        let state = ScreenState {
            generated_room_name: "Generated".into(),
            ..ScreenState::default()
        };
        assert_eq!(state.join_target(), "Generated");
        assert!(state.target_is_generated());
    }

    #[test]
    fn test_derive_state_prefers_external_room() {
        let previous = ScreenState {
            room: "local".into(),
            error_msg: "kept".into(),
            ..ScreenState::default()
        };
        let inputs = ScreenInputs {
            room: "external".into(),
            ..ScreenInputs::default()
        };
        let next = derive_state(&inputs, &previous);
        assert_eq!(next.room, "external");
        assert_eq!(next.error_msg, "kept");
    }

    #[test]
    fn test_derive_state_keeps_local_room_when_external_empty() {
        let previous = ScreenState {
            room: "local".into(),
            ..ScreenState::default()
        };
        let next = derive_state(&ScreenInputs::default(), &previous);
        assert_eq!(next, previous);
    }

    #[test]
    fn test_snapshot_carries_inputs() {
        let inputs = ScreenInputs {
            calendar_enabled: true,
            recent_list_enabled: true,
            room: String::new(),
            settings: Settings {
                display_name: Some("Ada".into()),
            },
        };
        let snap = ScreenSnapshot::capture(&ScreenState::default(), &inputs, false, true, 3);
        assert!(snap.calendar_enabled);
        assert!(snap.recent_list_enabled);
        assert!(snap.animating);
        assert_eq!(snap.regenerations, 3);
        assert_eq!(snap.settings.display_name.as_deref(), Some("Ada"));
    }
}
