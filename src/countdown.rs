//! Countdown component for bubbletea-rs applications.
//!
//! The countdown owns a whole number of seconds remaining and a single
//! repeating tick. Starting schedules the first tick one interval later and
//! every accepted tick schedules the next one, so the tick chain lives in
//! the runtime's command queue rather than in a background thread.
//!
//! # Timer handle
//!
//! Each start allocates a fresh tag and stores it as the live handle. A
//! [`TickMsg`] is honoured only when its id matches this countdown and its
//! tag matches the live handle. Pausing, resetting or reaching zero clears
//! the handle, so a tick that is already in flight is discarded when it
//! arrives. This keeps at most one tick chain alive per countdown: calling
//! [`Model::start`] twice never doubles the speed.
//!
//! # Basic Usage
//!
//! ```rust
//! use countdown_tea::countdown::new;
//!
//! let mut countdown = new(300);
//! let first_tick = countdown.start();
//! assert!(first_tick.is_some());
//! assert!(countdown.is_running());
//!
//! // A second start is absorbed.
//! assert!(countdown.start().is_none());
//!
//! countdown.pause();
//! assert!(!countdown.is_running());
//! ```
//!
//! # Hooks
//!
//! Lifecycle hooks are plain closures configured up front:
//!
//! ```rust
//! use countdown_tea::countdown::new;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//!
//! let ends = Arc::new(AtomicU32::new(0));
//! let counter = Arc::clone(&ends);
//!
//! let mut countdown = new(0).with_on_end(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! countdown.start();
//! countdown.tick();
//! assert_eq!(ends.load(Ordering::SeqCst), 1);
//! assert_eq!(countdown.seconds(), 0);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use countdown_tea::countdown::{new, EndMsg, Model};
//!
//! struct App {
//!     countdown: Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut countdown = new(10);
//!         let cmd = countdown.start();
//!         (Self { countdown }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(end) = msg.downcast_ref::<EndMsg>() {
//!             if end.id == self.countdown.id() {
//!                 return Some(bubbletea_rs::quit());
//!             }
//!         }
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Time remaining: {}", self.countdown.view())
//!     }
//! }
//! ```

use crate::clock::{self, MAX_SECONDS};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for countdown instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Interval between ticks when none is given.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

type Hook = Box<dyn FnMut() + Send>;
type TickHook = Box<dyn FnMut(u32, u32) + Send>;

/// Message delivered once per interval while the countdown runs.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the countdown that scheduled this tick.
    pub id: i64,
    tag: i64,
}

/// Message sent when a tick finds the countdown at zero.
#[derive(Debug, Clone)]
pub struct EndMsg {
    /// Id of the countdown that finished.
    pub id: i64,
}

#[derive(Default)]
struct Hooks {
    on_start: Option<Hook>,
    on_pause: Option<Hook>,
    on_reset: Option<Hook>,
    on_tick: Option<TickHook>,
    on_end: Option<Hook>,
}

fn fire(hook: &mut Option<Hook>) {
    if let Some(hook) = hook.as_mut() {
        hook();
    }
}

/// The countdown engine.
pub struct Model {
    seconds: u32,
    initial_seconds: u32,
    max_seconds: u32,
    interval: Duration,
    id: i64,
    tag: i64,
    handle: Option<i64>,
    hooks: Hooks,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("seconds", &self.seconds)
            .field("initial_seconds", &self.initial_seconds)
            .field("max_seconds", &self.max_seconds)
            .field("interval", &self.interval)
            .field("id", &self.id)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// Creates a stopped countdown with a custom tick interval.
///
/// The initial value is clamped to [`MAX_SECONDS`].
pub fn new_with_interval(seconds: u32, interval: Duration) -> Model {
    let seconds = seconds.min(MAX_SECONDS);
    Model {
        seconds,
        initial_seconds: seconds,
        max_seconds: MAX_SECONDS,
        interval,
        id: next_id(),
        tag: 0,
        handle: None,
        hooks: Hooks::default(),
    }
}

/// Creates a stopped countdown ticking once per second.
pub fn new(seconds: u32) -> Model {
    new_with_interval(seconds, DEFAULT_INTERVAL)
}

impl Model {
    /// Sets the upper clamp for direct writes and clamps the current value.
    pub fn with_max_seconds(mut self, max_seconds: u32) -> Self {
        self.max_seconds = max_seconds;
        self.seconds = self.seconds.min(max_seconds);
        self.initial_seconds = self.initial_seconds.min(max_seconds);
        self
    }

    /// Called once each time a stopped countdown starts.
    pub fn with_on_start(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.hooks.on_start = Some(Box::new(hook));
        self
    }

    /// Called when a running countdown is paused.
    pub fn with_on_pause(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.hooks.on_pause = Some(Box::new(hook));
        self
    }

    /// Called on every reset.
    pub fn with_on_reset(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.hooks.on_reset = Some(Box::new(hook));
        self
    }

    /// Called after each decrement with the previous and next values.
    pub fn with_on_tick(mut self, hook: impl FnMut(u32, u32) + Send + 'static) -> Self {
        self.hooks.on_tick = Some(Box::new(hook));
        self
    }

    /// Called once when a tick finds the countdown at zero.
    pub fn with_on_end(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.hooks.on_end = Some(Box::new(hook));
        self
    }

    /// Unique id of this countdown.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Seconds remaining.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// The value [`reset`](Self::reset) restores.
    ///
    /// This is the construction value until the first start, and the value
    /// captured at the most recent start afterwards.
    pub fn initial_seconds(&self) -> u32 {
        self.initial_seconds
    }

    /// Upper bound for direct writes.
    pub fn max_seconds(&self) -> u32 {
        self.max_seconds
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a tick chain is live.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Starts counting down.
    ///
    /// Returns the command that delivers the first tick, or `None` when the
    /// countdown is already running. The current value becomes the value
    /// restored by later resets.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.handle.is_some() {
            return None;
        }

        self.tag += 1;
        self.handle = Some(self.tag);
        self.initial_seconds = self.seconds;
        tracing::debug!(id = self.id, seconds = self.seconds, "countdown started");
        fire(&mut self.hooks.on_start);
        Some(self.schedule_tick())
    }

    /// Stops ticking, keeping the remaining value. No-op when stopped.
    pub fn pause(&mut self) {
        if self.handle.take().is_none() {
            return;
        }
        tracing::debug!(id = self.id, seconds = self.seconds, "countdown paused");
        fire(&mut self.hooks.on_pause);
    }

    /// Stops ticking and restores the value captured at the last start.
    pub fn reset(&mut self) {
        self.handle = None;
        self.seconds = self.initial_seconds;
        tracing::debug!(id = self.id, seconds = self.seconds, "countdown reset");
        fire(&mut self.hooks.on_reset);
    }

    /// Drops the tick handle without running any hook.
    ///
    /// Owners call this when tearing the countdown down so that a tick still
    /// queued in the runtime has no effect.
    pub fn release(&mut self) {
        self.handle = None;
    }

    /// Writes the remaining seconds directly, clamped to `[0, max_seconds]`.
    ///
    /// Ticking is neither started nor stopped.
    pub fn set_seconds(&mut self, seconds: u32) {
        self.seconds = seconds.min(self.max_seconds);
    }

    /// Replaces the remaining seconds with `f(current)`, clamped like
    /// [`set_seconds`](Self::set_seconds).
    pub fn update_seconds(&mut self, f: impl FnOnce(u32) -> u32) {
        let next = f(self.seconds);
        self.set_seconds(next);
    }

    /// Builds a tick message for the live handle.
    ///
    /// Useful for driving the countdown without the runtime. When stopped
    /// the message carries a tag that no handle will match.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.handle.unwrap_or(0),
        }
    }

    /// Runs one tick step if a tick chain is live.
    ///
    /// Returns the next command: another tick while time remains, an
    /// [`EndMsg`] delivery when the countdown has just ended, or `None` when
    /// stopped.
    pub fn tick(&mut self) -> Option<Cmd> {
        self.handle?;

        if self.seconds == 0 {
            self.handle = None;
            tracing::debug!(id = self.id, "countdown ended");
            fire(&mut self.hooks.on_end);
            return Some(self.end_cmd());
        }

        let prev = self.seconds;
        let next = prev - 1;
        self.seconds = next;
        tracing::trace!(id = self.id, prev, next, "countdown tick");
        if let Some(hook) = self.hooks.on_tick.as_mut() {
            hook(prev, next);
        }
        Some(self.schedule_tick())
    }

    fn schedule_tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn end_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| Box::new(EndMsg { id }) as Msg)
    }

    /// Handles tick messages addressed to this countdown.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;
        if tick_msg.id != self.id || self.handle != Some(tick_msg.tag) {
            return None;
        }
        self.tick()
    }

    /// Renders the remaining time as `MM:SS`.
    pub fn view(&self) -> String {
        clock::format_clock(self.seconds)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new(clock::DEFAULT_SECONDS);
        let cmd = model.start();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new(clock::DEFAULT_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // Records hook invocations in call order.
    fn recorded() -> (Arc<Mutex<Vec<String>>>, Model) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (a, b, c, d, e) = (
            Arc::clone(&log),
            Arc::clone(&log),
            Arc::clone(&log),
            Arc::clone(&log),
            Arc::clone(&log),
        );
        let model = new(3)
            .with_on_start(move || a.lock().unwrap().push("start".to_string()))
            .with_on_pause(move || b.lock().unwrap().push("pause".to_string()))
            .with_on_reset(move || c.lock().unwrap().push("reset".to_string()))
            .with_on_tick(move |prev, next| {
                d.lock().unwrap().push(format!("tick {prev}->{next}"))
            })
            .with_on_end(move || e.lock().unwrap().push("end".to_string()));
        (log, model)
    }

    fn deliver(model: &mut Model, msg: TickMsg) -> Option<Cmd> {
        model.update(Box::new(msg))
    }

    #[test]
    fn test_new_is_stopped() {
        let countdown = new(300);
        assert_eq!(countdown.seconds(), 300);
        assert_eq!(countdown.initial_seconds(), 300);
        assert_eq!(countdown.interval(), DEFAULT_INTERVAL);
        assert_eq!(countdown.max_seconds(), MAX_SECONDS);
        assert!(!countdown.is_running());
        assert!(countdown.id() > 0);
    }

    #[test]
    fn test_new_clamps_to_maximum() {
        assert_eq!(new(MAX_SECONDS + 10).seconds(), MAX_SECONDS);
        assert_eq!(new(50).with_max_seconds(30).seconds(), 30);
    }

    #[test]
    fn test_unique_ids() {
        assert_ne!(new(1).id(), new(1).id());
    }

    #[test]
    fn test_double_start_keeps_one_tick_chain() {
        let mut countdown = new(10);
        assert!(countdown.start().is_some());
        let first = countdown.tick_msg();

        assert!(countdown.start().is_none());
        assert_eq!(countdown.tick_msg().tag, first.tag);

        // One delivery, one decrement.
        deliver(&mut countdown, first);
        assert_eq!(countdown.seconds(), 9);
    }

    #[test]
    fn test_three_ticks_then_pause_then_reset() {
        let mut countdown = new(300);
        countdown.start();
        for _ in 0..3 {
            let msg = countdown.tick_msg();
            assert!(deliver(&mut countdown, msg).is_some());
        }
        assert_eq!(countdown.seconds(), 297);
        assert!(countdown.is_running());

        let in_flight = countdown.tick_msg();
        countdown.pause();
        assert!(!countdown.is_running());
        assert!(deliver(&mut countdown, in_flight).is_none());
        assert_eq!(countdown.seconds(), 297);

        countdown.reset();
        assert_eq!(countdown.seconds(), 300);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_zero_start_ends_on_first_tick() {
        let ends = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&ends);
        let mut countdown = new(0).with_on_end(move || *counter.lock().unwrap() += 1);

        countdown.start();
        let msg = countdown.tick_msg();
        assert!(deliver(&mut countdown, msg.clone()).is_some());
        assert_eq!(*ends.lock().unwrap(), 1);
        assert_eq!(countdown.seconds(), 0);
        assert!(!countdown.is_running());

        // The same tick arriving again is stale.
        assert!(deliver(&mut countdown, msg).is_none());
        assert_eq!(*ends.lock().unwrap(), 1);
    }

    #[test]
    fn test_runs_to_zero_then_ends_once() {
        let (log, mut countdown) = recorded();
        countdown.start();
        while countdown.is_running() {
            let msg = countdown.tick_msg();
            deliver(&mut countdown, msg);
        }
        assert_eq!(countdown.seconds(), 0);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["start", "tick 3->2", "tick 2->1", "tick 1->0", "end"]
        );
    }

    #[test]
    fn test_reset_restores_value_from_last_start() {
        let mut countdown = new(300);
        countdown.set_seconds(120);
        countdown.start();
        countdown.tick();
        countdown.tick();
        countdown.pause();
        assert_eq!(countdown.seconds(), 118);

        countdown.reset();
        assert_eq!(countdown.seconds(), 120);
        assert_eq!(countdown.initial_seconds(), 120);
    }

    #[test]
    fn test_reset_before_any_start_restores_construction_value() {
        let mut countdown = new(300);
        countdown.set_seconds(42);
        countdown.reset();
        assert_eq!(countdown.seconds(), 300);
    }

    #[test]
    fn test_pause_when_stopped_is_silent() {
        let (log, mut countdown) = recorded();
        countdown.pause();
        assert!(log.lock().unwrap().is_empty());

        countdown.start();
        countdown.pause();
        countdown.pause();
        assert_eq!(*log.lock().unwrap(), vec!["start", "pause"]);
    }

    #[test]
    fn test_reset_always_fires_hook() {
        let (log, mut countdown) = recorded();
        countdown.reset();
        countdown.start();
        countdown.reset();
        assert_eq!(*log.lock().unwrap(), vec!["reset", "start", "reset"]);
    }

    #[test]
    fn test_set_seconds_clamps() {
        let mut countdown = new(10);
        countdown.set_seconds(MAX_SECONDS + 1);
        assert_eq!(countdown.seconds(), MAX_SECONDS);

        countdown.update_seconds(|s| s.saturating_sub(MAX_SECONDS * 2));
        assert_eq!(countdown.seconds(), 0);

        countdown.update_seconds(|s| s + 90);
        assert_eq!(countdown.seconds(), 90);
    }

    #[test]
    fn test_set_seconds_while_running_keeps_ticking() {
        let mut countdown = new(10);
        countdown.start();
        countdown.set_seconds(60);
        assert!(countdown.is_running());
        let msg = countdown.tick_msg();
        deliver(&mut countdown, msg);
        assert_eq!(countdown.seconds(), 59);
    }

    #[test]
    fn test_restart_invalidates_old_ticks() {
        let mut countdown = new(10);
        countdown.start();
        let old = countdown.tick_msg();
        countdown.pause();
        countdown.start();

        assert!(deliver(&mut countdown, old).is_none());
        assert_eq!(countdown.seconds(), 10);
    }

    #[test]
    fn test_rejects_foreign_ticks() {
        let mut a = new(10);
        let mut b = new(10);
        a.start();
        b.start();

        let from_b = b.tick_msg();
        assert!(deliver(&mut a, from_b).is_none());
        assert_eq!(a.seconds(), 10);
    }

    #[test]
    fn test_release_stops_without_hooks() {
        let (log, mut countdown) = recorded();
        countdown.start();
        let in_flight = countdown.tick_msg();
        countdown.release();

        assert!(!countdown.is_running());
        assert!(deliver(&mut countdown, in_flight).is_none());
        assert_eq!(*log.lock().unwrap(), vec!["start"]);
    }

    #[test]
    fn test_tick_when_stopped_does_nothing() {
        let mut countdown = new(5);
        assert!(countdown.tick().is_none());
        assert_eq!(countdown.seconds(), 5);
    }

    #[test]
    fn test_view_format() {
        assert_eq!(new(65).view(), "01:05");
        assert_eq!(new(0).view(), "00:00");
    }

    #[tokio::test]
    async fn test_end_command_delivers_end_msg() {
        let mut countdown = new(0);
        countdown.start();
        let cmd = countdown.tick().expect("end command");

        let msg = cmd.await.expect("message");
        let end = msg.downcast_ref::<EndMsg>().expect("end message");
        assert_eq!(end.id, countdown.id());
    }

    #[tokio::test]
    async fn test_start_command_delivers_matching_tick() {
        let mut countdown = new_with_interval(5, Duration::from_millis(1));
        let cmd = countdown.start().expect("tick command");

        let msg = cmd.await.expect("message");
        assert!(countdown.update(msg).is_some());
        assert_eq!(countdown.seconds(), 4);
    }
}
