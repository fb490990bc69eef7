#![warn(missing_docs)]

//! # countdown-tea
//!
//! A keyboard-driven countdown timer for the terminal, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) and styled with
//! lipgloss.
//!
//! ## Overview
//!
//! The crate has two layers:
//!
//! - [`countdown`]: a reusable countdown component. It owns the seconds
//!   remaining and a single repeating tick, exposes `start`, `pause`,
//!   `reset` and direct writes, and runs optional lifecycle hooks. It follows
//!   the Elm Architecture like any other bubbletea-rs component: ticks arrive
//!   as messages through `update()` and the current value renders through
//!   `view()`.
//! - [`view`]: the full-screen timer. It binds keys to countdown operations,
//!   draws the clock face in large digits, flashes when time runs out, plays
//!   a notification and keeps the window title in sync.
//!
//! Supporting modules provide key bindings ([`key`]), the hint bar
//! ([`help`]), clock arithmetic and parsing ([`clock`]), the digit glyphs
//! ([`digits`]), command-line configuration ([`config`]) and log setup
//! ([`logging`]).
//!
//! ## Using the countdown in your own program
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use countdown_tea::countdown::{self, EndMsg};
//!
//! struct Egg {
//!     countdown: countdown::Model,
//! }
//!
//! impl BubbleTeaModel for Egg {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut countdown = countdown::new(6 * 60);
//!         let cmd = countdown.start();
//!         (Self { countdown }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if msg.downcast_ref::<EndMsg>().is_some() {
//!             return Some(bubbletea_rs::quit());
//!         }
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Egg ready in {}", self.countdown.view())
//!     }
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```text
//! countdown 25m
//! countdown 01:30 --sound-command "paplay notification.wav"
//! ```

pub mod clock;
pub mod config;
pub mod countdown;
pub mod digits;
pub mod help;
pub mod key;
pub mod logging;
pub mod view;

pub use clock::{format_clock, parse_duration, ParseDurationError, MAX_SECONDS, MINUTE};
pub use config::Config;
pub use countdown::{
    new as countdown_new, new_with_interval as countdown_new_with_interval, EndMsg,
    Model as Countdown, TickMsg as CountdownTickMsg,
};
pub use help::Model as HelpModel;
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use view::{Command, Model as TimerView, TimerKeyMap};

/// Prelude module for convenient imports.
///
/// ```rust
/// use countdown_tea::prelude::*;
///
/// let mut countdown = countdown_new(90);
/// assert_eq!(countdown.view(), "01:30");
/// assert!(countdown.start().is_some());
/// ```
pub mod prelude {
    pub use crate::clock::{format_clock, MAX_SECONDS, MINUTE};
    pub use crate::countdown::{
        new as countdown_new, new_with_interval as countdown_new_with_interval, EndMsg,
        Model as Countdown, TickMsg as CountdownTickMsg,
    };
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::view::{Command, Model as TimerView, TimerKeyMap};
}
