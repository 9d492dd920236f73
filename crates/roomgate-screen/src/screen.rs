//! Screen actor: an isolated Tokio task that owns one screen's state.
//!
//! The actor multiplexes three inputs in a single `select!` loop: commands
//! from [`ScreenHandle`]s, fired timers, and results of the background
//! lookup/navigation tasks. Only the actor ever touches [`ScreenState`], so
//! no locks are needed; every change is published as a [`ScreenSnapshot`]
//! on a watch channel.

use std::ops::ControlFlow;
use std::sync::Arc;

use roomgate_names::RoomNameGenerator;
use roomgate_resolve::{Resolution, ResolveError, ResolveRequest, Resolver};
use roomgate_timer::{Fired, TimerQueue};
use tokio::sync::{mpsc, oneshot, watch};

use crate::collab::{AnalyticsSink, KeyValueStore, Navigator, Sinks, WelcomePageEvent};
use crate::{
    AnimationScheduler, JoinStart, JoinTrigger, JoinWorkflow, LifecycleGuard, NavigationError,
    RegenerationLoop, ScreenConfig, ScreenError, ScreenInputs, ScreenSnapshot, ScreenState,
    ScreenTimer, derive_state,
};

/// Commands sent to a screen actor through its channel.
pub(crate) enum ScreenCommand {
    /// The user asked to join.
    Join {
        reply: oneshot::Sender<JoinTrigger>,
    },

    /// The room text field changed.
    SetRoom { value: String },

    /// The application-level inputs changed.
    UpdateInputs { inputs: ScreenInputs },

    /// Request the current snapshot.
    Snapshot {
        reply: oneshot::Sender<ScreenSnapshot>,
    },

    /// Tear the screen down.
    Destroy { reply: oneshot::Sender<()> },
}

/// Results delivered by the background join tasks.
enum WorkflowEvent {
    Resolved(Result<Resolution, ResolveError>),
    NavigationSettled(Result<(), NavigationError>),
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

/// Everything needed to create a screen.
pub struct ScreenSetup<R, N> {
    pub config: ScreenConfig,
    pub inputs: ScreenInputs,
    pub resolver: R,
    pub navigator: N,
    pub sinks: Sinks,
    pub generator: RoomNameGenerator,
}

impl<R: Resolver, N: Navigator> ScreenSetup<R, N> {
    /// Default config, empty inputs, tracing analytics, in-memory storage.
    pub fn new(resolver: R, navigator: N) -> Self {
        Self {
            config: ScreenConfig::default(),
            inputs: ScreenInputs::default(),
            resolver,
            navigator,
            sinks: Sinks::default(),
            generator: RoomNameGenerator::new(),
        }
    }

    pub fn config(mut self, config: ScreenConfig) -> Self {
        self.config = config;
        self
    }

    pub fn inputs(mut self, inputs: ScreenInputs) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn analytics(mut self, analytics: Arc<dyn AnalyticsSink>) -> Self {
        self.sinks.analytics = analytics;
        self
    }

    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.sinks.store = store;
        self
    }

    pub fn generator(mut self, generator: RoomNameGenerator) -> Self {
        self.generator = generator;
        self
    }
}

/// Creates a screen and returns a handle to it.
///
/// Spawns the screen actor, which immediately reports a `Viewed` event and
/// seeds the first generated room name. Must be called within a Tokio
/// runtime.
pub fn create<R: Resolver, N: Navigator>(setup: ScreenSetup<R, N>) -> ScreenHandle {
    let ScreenSetup {
        config,
        inputs,
        resolver,
        navigator,
        sinks,
        generator,
    } = setup;
    let config = config.validated();

    let guard = LifecycleGuard::new();
    let (timers, timer_rx) = TimerQueue::new(guard.child_token());
    let (command_tx, command_rx) = mpsc::channel(config.command_channel_size);
    let (workflow_tx, workflow_rx) = mpsc::unbounded_channel();

    let state = derive_state(&inputs, &ScreenState::default());
    let initial = ScreenSnapshot::capture(&state, &inputs, false, false, 0);
    let (snapshot_tx, snapshot_rx) = watch::channel(initial);

    let actor = ScreenActor {
        state,
        animation: AnimationScheduler::new(config.timing.animate_step()),
        regeneration: RegenerationLoop::new(config.timing.regenerate_interval(), generator),
        join: JoinWorkflow::new(config.device_id_or_random()),
        inputs,
        timers,
        timer_rx,
        workflow_tx,
        workflow_rx,
        commands: command_rx,
        guard: guard.clone(),
        resolver: Arc::new(resolver),
        navigator: Arc::new(navigator),
        sinks,
        snapshots: snapshot_tx,
        config,
    };

    tokio::spawn(actor.run());

    ScreenHandle {
        sender: command_tx,
        snapshots: snapshot_rx,
        guard,
    }
}

// ---------------------------------------------------------------------------
// Handle
// ---------------------------------------------------------------------------

/// Handle to a running screen. Cheap to clone.
///
/// The screen is torn down by [`destroy`](Self::destroy) or once every
/// handle has been dropped.
#[derive(Clone)]
pub struct ScreenHandle {
    sender: mpsc::Sender<ScreenCommand>,
    snapshots: watch::Receiver<ScreenSnapshot>,
    guard: LifecycleGuard,
}

impl ScreenHandle {
    /// Triggers a join with the current typed or generated room.
    pub async fn join(&self) -> Result<JoinTrigger, ScreenError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(ScreenCommand::Join { reply: reply_tx }).await?;
        reply_rx.await.map_err(|_| ScreenError::Unavailable)
    }

    /// Replaces the typed room.
    pub async fn set_room(&self, value: impl Into<String>) -> Result<(), ScreenError> {
        self.send(ScreenCommand::SetRoom {
            value: value.into(),
        })
        .await
    }

    /// Replaces the application inputs and re-derives state from them.
    pub async fn update_inputs(&self, inputs: ScreenInputs) -> Result<(), ScreenError> {
        self.send(ScreenCommand::UpdateInputs { inputs }).await
    }

    /// Requests a snapshot reflecting every command sent before it.
    pub async fn snapshot(&self) -> Result<ScreenSnapshot, ScreenError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(ScreenCommand::Snapshot { reply: reply_tx }).await?;
        reply_rx.await.map_err(|_| ScreenError::Unavailable)
    }

    /// Subscribes to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<ScreenSnapshot> {
        self.snapshots.clone()
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> ScreenSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Whether the screen has not been torn down yet.
    pub fn is_alive(&self) -> bool {
        self.guard.is_alive()
    }

    /// Tears the screen down and waits until it is gone.
    ///
    /// Destroying an already destroyed screen succeeds.
    pub async fn destroy(&self) -> Result<(), ScreenError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self
            .sender
            .send(ScreenCommand::Destroy { reply: reply_tx })
            .await
            .is_err()
        {
            return Ok(());
        }
        // A dropped reply means the actor stopped on its own, which is
        // just as torn down.
        let _ = reply_rx.await;
        Ok(())
    }

    async fn send(&self, command: ScreenCommand) -> Result<(), ScreenError> {
        if !self.guard.is_alive() {
            return Err(ScreenError::Unavailable);
        }
        self.sender
            .send(command)
            .await
            .map_err(|_| ScreenError::Unavailable)
    }
}

impl std::fmt::Debug for ScreenHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenHandle")
            .field("alive", &self.guard.is_alive())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// The internal screen actor state. Runs inside a Tokio task.
struct ScreenActor<R: Resolver, N: Navigator> {
    state: ScreenState,
    inputs: ScreenInputs,
    config: ScreenConfig,
    animation: AnimationScheduler,
    regeneration: RegenerationLoop,
    join: JoinWorkflow,
    timers: TimerQueue<ScreenTimer>,
    timer_rx: mpsc::UnboundedReceiver<Fired<ScreenTimer>>,
    workflow_tx: mpsc::UnboundedSender<WorkflowEvent>,
    workflow_rx: mpsc::UnboundedReceiver<WorkflowEvent>,
    commands: mpsc::Receiver<ScreenCommand>,
    guard: LifecycleGuard,
    resolver: Arc<R>,
    navigator: Arc<N>,
    sinks: Sinks,
    snapshots: watch::Sender<ScreenSnapshot>,
}

impl<R: Resolver, N: Navigator> ScreenActor<R, N> {
    /// Runs the actor loop until the screen is destroyed.
    async fn run(mut self) {
        tracing::info!(device_id = %self.join.device_id(), "welcome screen created");

        self.sinks.analytics.send(WelcomePageEvent::Viewed);
        self.regeneration
            .tick(&mut self.state, &mut self.animation, &mut self.timers);
        self.settle();

        loop {
            tokio::select! {
                cmd = self.commands.recv() => {
                    let Some(cmd) = cmd else {
                        tracing::debug!("all screen handles dropped");
                        break;
                    };
                    if self.handle_command(cmd).is_break() {
                        break;
                    }
                }
                Some(fired) = self.timer_rx.recv() => self.handle_timer(fired),
                Some(event) = self.workflow_rx.recv() => self.handle_workflow(event),
            }
            self.settle();
        }

        self.teardown();
        tracing::info!("welcome screen destroyed");
    }

    fn handle_command(&mut self, cmd: ScreenCommand) -> ControlFlow<()> {
        match cmd {
            ScreenCommand::Join { reply } => {
                let trigger = self.start_join();
                // Subscribers must see the lookup in flight once join() returns.
                self.settle();
                let _ = reply.send(trigger);
            }
            ScreenCommand::SetRoom { value } => {
                self.state.room = value;
            }
            ScreenCommand::UpdateInputs { inputs } => {
                self.inputs = inputs;
            }
            ScreenCommand::Snapshot { reply } => {
                let _ = reply.send(self.snapshot());
            }
            ScreenCommand::Destroy { reply } => {
                self.teardown();
                let _ = reply.send(());
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn handle_timer(&mut self, fired: Fired<ScreenTimer>) {
        if !self.guard.is_alive() || !self.timers.acknowledge(&fired) {
            return;
        }
        match fired.event {
            ScreenTimer::Animate => {
                self.animation
                    .on_step(fired.handle, &mut self.state, &mut self.timers);
            }
            ScreenTimer::Regenerate => {
                self.regeneration.on_fired(
                    fired.handle,
                    &mut self.state,
                    &mut self.animation,
                    &mut self.timers,
                );
            }
        }
    }

    fn handle_workflow(&mut self, event: WorkflowEvent) {
        if !self.guard.is_alive() {
            return;
        }
        match event {
            WorkflowEvent::Resolved(result) => {
                let navigate_to = self.join.on_resolved(
                    result,
                    &mut self.state,
                    &mut self.animation,
                    &mut self.timers,
                    &self.sinks,
                );
                if let Some(room_url) = navigate_to {
                    self.spawn_navigation(room_url);
                }
            }
            WorkflowEvent::NavigationSettled(result) => {
                self.join.on_navigation_settled(result, &mut self.state);
            }
        }
    }

    fn start_join(&mut self) -> JoinTrigger {
        let start = self.join.begin(&mut self.state, &self.inputs.settings);
        let trigger = JoinTrigger::from(&start);
        if let JoinStart::Lookup(request) = start {
            self.spawn_lookup(request);
        }
        trigger
    }

    /// Runs the lookup in its own task. The result is dropped if the
    /// screen is torn down before it arrives.
    fn spawn_lookup(&self, request: ResolveRequest) {
        let resolver = Arc::clone(&self.resolver);
        let events = self.workflow_tx.clone();
        let guard = self.guard.clone();
        let limit = self.config.lookup_timeout();

        tokio::spawn(async move {
            let result = match tokio::time::timeout(limit, resolver.resolve(&request)).await {
                Ok(result) => result,
                Err(_) => Err(ResolveError::Timeout),
            };
            if !guard.is_alive() {
                tracing::debug!(
                    room = %request.meeting_id,
                    "screen destroyed before lookup settled, dropping result"
                );
                return;
            }
            let _ = events.send(WorkflowEvent::Resolved(result));
        });
    }

    fn spawn_navigation(&self, room_url: String) {
        let navigator = Arc::clone(&self.navigator);
        let events = self.workflow_tx.clone();
        let guard = self.guard.clone();

        tracing::info!(%room_url, "navigating");
        tokio::spawn(async move {
            let result = navigator.navigate(&room_url).await;
            if !guard.is_alive() {
                tracing::debug!(%room_url, "screen destroyed before navigation settled");
                return;
            }
            let _ = events.send(WorkflowEvent::NavigationSettled(result));
        });
    }

    fn teardown(&mut self) {
        self.guard.teardown(&mut self.state, &mut self.timers);
    }

    fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::capture(
            &self.state,
            &self.inputs,
            self.join.is_resolving(),
            self.animation.is_revealing(),
            self.regeneration.ticks(),
        )
    }

    /// Re-applies the external inputs, then publishes.
    ///
    /// Runs after every mutation, so a non-empty external room always
    /// wins over typed and resolved values.
    fn settle(&mut self) {
        self.state = derive_state(&self.inputs, &self.state);
        self.publish();
    }

    /// Publishes the current snapshot if it differs from the last one.
    fn publish(&self) {
        if !self.guard.is_alive() {
            return;
        }
        let next = self.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}
