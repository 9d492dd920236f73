//! # Roomgate
//!
//! Room-selection screen for video-conferencing clients.
//!
//! A screen suggests a freshly generated room name every few seconds,
//! reveals it one character at a time, and on join checks the chosen room
//! against a resolution service before navigating into it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roomgate::prelude::*;
//!
//! struct LogNavigator;
//!
//! impl Navigator for LogNavigator {
//!     async fn navigate(&self, room_url: &str) -> Result<(), NavigationError> {
//!         println!("joining {room_url}");
//!         Ok(())
//!     }
//! }
//!
//! # async fn run() -> Result<(), RoomgateError> {
//! let config = RoomgateConfig::load("roomgate.toml")?;
//! let screen = WelcomeScreenBuilder::new(config).build(LogNavigator)?;
//! screen.join().await?;
//! screen.destroy().await?;
//! # Ok(())
//! # }
//! ```

#![allow(async_fn_in_trait)]

mod builder;
mod config;
mod error;
mod store;

pub use builder::WelcomeScreenBuilder;
pub use config::{ConfigError, ENV_SERVICE_TOKEN, ENV_SERVICE_URL, RoomgateConfig, StorageConfig};
pub use error::RoomgateError;
pub use store::JsonFileStore;

pub use roomgate_names as names;
pub use roomgate_resolve as resolve;
pub use roomgate_screen as screen;
pub use roomgate_timer as timer;

pub mod prelude {
    pub use crate::{
        ConfigError, JsonFileStore, RoomgateConfig, RoomgateError, StorageConfig,
        WelcomeScreenBuilder,
    };
    pub use roomgate_names::{RoomName, RoomNameGenerator};
    pub use roomgate_resolve::{
        HttpResolver, Resolution, ResolveError, ResolveRequest, ResolvedRoom, Resolver,
        ResolverConfig,
    };
    pub use roomgate_screen::{
        AnalyticsSink, JoinTrigger, KeyValueStore, MemoryStore, NavigationError, Navigator,
        ScreenConfig, ScreenError, ScreenHandle, ScreenInputs, ScreenSnapshot, Settings,
        TracingAnalytics, WelcomePageEvent,
    };
    pub use roomgate_timer::TimingConfig;
}
