//! Integration tests for the cancellable timer queue.
//!
//! Uses `tokio::time::pause()` (via `start_paused`) so sleeps resolve in
//! virtual time and ordering is deterministic.

use std::time::Duration;

use roomgate_timer::{TimerQueue, TimingConfig};
use tokio::time::{Instant, timeout};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ev {
    A,
    B,
}

// =========================================================================
// TimingConfig
// =========================================================================

#[test]
fn test_default_timing() {
    let cfg = TimingConfig::default();
    assert_eq!(cfg.animate_step(), Duration::from_millis(70));
    assert_eq!(cfg.regenerate_interval(), Duration::from_secs(10));
}

#[test]
fn test_validated_clamps_zero_delays() {
    let cfg = TimingConfig {
        animate_step_ms: 0,
        regenerate_interval_ms: 0,
    }
    .validated();
    assert_eq!(cfg.animate_step_ms, TimingConfig::MIN_DELAY_MS);
    assert_eq!(cfg.regenerate_interval_ms, TimingConfig::MIN_DELAY_MS);
}

#[test]
fn test_validated_keeps_valid_values() {
    let cfg = TimingConfig {
        animate_step_ms: 5,
        regenerate_interval_ms: 500,
    };
    assert_eq!(cfg.clone().validated(), cfg);
}

// =========================================================================
// Firing
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_timer_fires_after_delay() {
    let (mut timers, mut rx) = TimerQueue::new(CancellationToken::new());
    let start = Instant::now();
    let handle = timers.schedule(Duration::from_millis(70), Ev::A);

    let fired = rx.recv().await.unwrap();
    assert_eq!(fired.handle, handle);
    assert_eq!(fired.event, Ev::A);
    assert!(start.elapsed() >= Duration::from_millis(70));
    assert!(timers.acknowledge(&fired));
    assert_eq!(timers.pending_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_timers_fire_in_deadline_order() {
    let (mut timers, mut rx) = TimerQueue::new(CancellationToken::new());
    let late = timers.schedule(Duration::from_millis(200), Ev::B);
    let early = timers.schedule(Duration::from_millis(100), Ev::A);

    assert_eq!(rx.recv().await.unwrap().handle, early);
    assert_eq!(rx.recv().await.unwrap().handle, late);
}

#[tokio::test(start_paused = true)]
async fn test_handles_are_unique() {
    let (mut timers, _rx) = TimerQueue::<Ev>::new(CancellationToken::new());
    let a = timers.schedule(Duration::from_secs(1), Ev::A);
    let b = timers.schedule(Duration::from_secs(1), Ev::A);
    assert_ne!(a, b);
    assert!(b.into_inner() > a.into_inner());
    assert_eq!(timers.pending_count(), 2);
}

// =========================================================================
// Cancellation
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_cancelled_timer_never_fires() {
    let (mut timers, mut rx) = TimerQueue::new(CancellationToken::new());
    let handle = timers.schedule(Duration::from_millis(50), Ev::A);
    assert!(timers.cancel(handle));
    assert!(!timers.is_pending(handle));

    let result = timeout(Duration::from_secs(1), rx.recv()).await;
    assert!(result.is_err(), "cancelled timer delivered an event");
}

#[tokio::test(start_paused = true)]
async fn test_cancel_is_idempotent() {
    let (mut timers, _rx) = TimerQueue::<Ev>::new(CancellationToken::new());
    let handle = timers.schedule(Duration::from_millis(50), Ev::A);
    assert!(timers.cancel(handle));
    assert!(!timers.cancel(handle));
    assert!(!timers.cancel(handle));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_after_fire_marks_event_stale() {
    let (mut timers, mut rx) = TimerQueue::new(CancellationToken::new());
    let handle = timers.schedule(Duration::from_millis(10), Ev::A);

    // Let the timer fire and deliver, but cancel before acknowledging.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(timers.cancel(handle));

    let fired = rx.recv().await.unwrap();
    assert_eq!(fired.handle, handle);
    assert!(!timers.acknowledge(&fired), "stale event was acknowledged");
}

#[tokio::test(start_paused = true)]
async fn test_acknowledge_twice_is_stale() {
    let (mut timers, mut rx) = TimerQueue::new(CancellationToken::new());
    timers.schedule(Duration::from_millis(10), Ev::B);
    let fired = rx.recv().await.unwrap();
    assert!(timers.acknowledge(&fired));
    assert!(!timers.acknowledge(&fired));
    assert!(!timers.cancel(fired.handle));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_all() {
    let (mut timers, mut rx) = TimerQueue::new(CancellationToken::new());
    timers.schedule(Duration::from_millis(10), Ev::A);
    timers.schedule(Duration::from_millis(20), Ev::B);
    assert_eq!(timers.cancel_all(), 2);
    assert_eq!(timers.pending_count(), 0);
    assert_eq!(timers.cancel_all(), 0);

    let result = timeout(Duration::from_secs(1), rx.recv()).await;
    assert!(result.is_err());
}

// =========================================================================
// Shutdown token
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_shutdown_suppresses_delivery() {
    let token = CancellationToken::new();
    let (mut timers, mut rx) = TimerQueue::new(token.clone());
    timers.schedule(Duration::from_millis(30), Ev::A);
    token.cancel();

    let result = timeout(Duration::from_secs(1), rx.recv()).await;
    assert!(result.is_err(), "timer fired after shutdown");
}

#[tokio::test(start_paused = true)]
async fn test_schedule_after_shutdown_never_fires() {
    let token = CancellationToken::new();
    token.cancel();
    let (mut timers, mut rx) = TimerQueue::new(token);
    timers.schedule(Duration::from_millis(1), Ev::A);

    let result = timeout(Duration::from_secs(1), rx.recv()).await;
    assert!(result.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_queue_stops_timers() {
    let (mut timers, mut rx) = TimerQueue::new(CancellationToken::new());
    timers.schedule(Duration::from_millis(30), Ev::A);
    drop(timers);

    // All senders are gone once the aborted tasks are dropped.
    let result = timeout(Duration::from_secs(1), rx.recv()).await;
    assert!(matches!(result, Ok(None)));
}
