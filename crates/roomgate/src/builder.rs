//! `WelcomeScreenBuilder`: wires configuration into a running screen.

use std::sync::Arc;

use roomgate_names::RoomNameGenerator;
use roomgate_resolve::{HttpResolver, Resolver};
use roomgate_screen::{
    AnalyticsSink, KeyValueStore, MemoryStore, Navigator, ScreenHandle, ScreenInputs, ScreenSetup,
    create,
};

use crate::{JsonFileStore, RoomgateConfig, RoomgateError};

/// Builder for a welcome screen.
///
/// # Example
///
/// ```rust,ignore
/// use roomgate::prelude::*;
///
/// let config = RoomgateConfig::load("roomgate.toml")?;
/// let screen = WelcomeScreenBuilder::new(config)
///     .inputs(inputs)
///     .build(my_navigator)?;
/// screen.join().await?;
/// ```
pub struct WelcomeScreenBuilder {
    config: RoomgateConfig,
    inputs: ScreenInputs,
    analytics: Option<Arc<dyn AnalyticsSink>>,
    store: Option<Arc<dyn KeyValueStore>>,
    generator: Option<RoomNameGenerator>,
}

impl WelcomeScreenBuilder {
    pub fn new(config: RoomgateConfig) -> Self {
        Self {
            config,
            inputs: ScreenInputs::default(),
            analytics: None,
            store: None,
            generator: None,
        }
    }

    /// Sets the initial application inputs.
    pub fn inputs(mut self, inputs: ScreenInputs) -> Self {
        self.inputs = inputs;
        self
    }

    /// Replaces the default tracing analytics sink.
    pub fn analytics(mut self, analytics: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(analytics);
        self
    }

    /// Replaces the store chosen from `storage.path`.
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Uses a specific name generator, e.g. a seeded one.
    pub fn generator(mut self, generator: RoomNameGenerator) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Starts the screen against the configured HTTP resolution service.
    ///
    /// Must be called within a Tokio runtime.
    pub fn build<N: Navigator>(self, navigator: N) -> Result<ScreenHandle, RoomgateError> {
        let resolver = HttpResolver::new(&self.config.resolver)?;
        tracing::info!(endpoint = resolver.endpoint(), "using resolution service");
        Ok(self.build_with(resolver, navigator))
    }

    /// Starts the screen with a caller-supplied resolver.
    pub fn build_with<R: Resolver, N: Navigator>(self, resolver: R, navigator: N) -> ScreenHandle {
        let store: Arc<dyn KeyValueStore> = match (self.store, &self.config.storage.path) {
            (Some(store), _) => store,
            (None, Some(path)) => {
                tracing::debug!(path = %path.display(), "using json file store");
                Arc::new(JsonFileStore::new(path))
            }
            (None, None) => Arc::new(MemoryStore::new()),
        };

        let mut setup = ScreenSetup::new(resolver, navigator)
            .config(self.config.screen)
            .inputs(self.inputs)
            .store(store);
        if let Some(analytics) = self.analytics {
            setup = setup.analytics(analytics);
        }
        if let Some(generator) = self.generator {
            setup = setup.generator(generator);
        }
        create(setup)
    }
}

impl std::fmt::Debug for WelcomeScreenBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WelcomeScreenBuilder")
            .field("config", &self.config)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}
