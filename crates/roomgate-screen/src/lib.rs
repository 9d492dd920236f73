//! Room-selection screen for Roomgate.
//!
//! Each screen runs as an isolated Tokio task (actor model) that owns its
//! state, animates a generated room name into the placeholder, regenerates
//! that name periodically, and drives the join workflow against a
//! [`Resolver`](roomgate_resolve::Resolver) and a [`Navigator`].
//!
//! # Key types
//!
//! - [`create`] / [`ScreenSetup`]: start a screen
//! - [`ScreenHandle`]: send commands to a running screen and observe it
//! - [`ScreenSnapshot`]: what a view renders
//! - [`AnimationScheduler`], [`RegenerationLoop`], [`JoinWorkflow`]: the
//!   state machines the actor composes
//! - [`LifecycleGuard`]: gates every late continuation after teardown

#![allow(async_fn_in_trait)]

mod animation;
mod collab;
mod config;
mod error;
mod guard;
mod join;
mod regenerate;
mod screen;
mod state;

pub use animation::{AnimationPhase, AnimationScheduler};
pub use collab::{
    AnalyticsSink, KeyValueStore, MemoryStore, Navigator, Sinks, TITLE_KEY, TracingAnalytics,
    WelcomePageEvent,
};
pub use config::ScreenConfig;
pub use error::{
    EMPTY_ROOM_MESSAGE, INVALID_ROOM_MESSAGE, JoinError, NETWORK_ERROR_MESSAGE, NavigationError,
    ScreenError, StoreError,
};
pub use guard::LifecycleGuard;
pub use join::{JoinPhase, JoinStart, JoinTrigger, JoinWorkflow};
pub use regenerate::RegenerationLoop;
pub use screen::{ScreenHandle, ScreenSetup, create};
pub use state::{ScreenInputs, ScreenSnapshot, ScreenState, ScreenTimer, Settings, derive_state};

pub use roomgate_timer::{Fired, TimerHandle, TimerQueue, TimingConfig};
