//! Full-screen timer view.
//!
//! The view wraps a [`countdown`](crate::countdown) engine and turns key
//! presses into engine operations through the [`TimerKeyMap`] dispatch
//! table. It draws the remaining time in large digits, flashes the face for
//! two seconds when the countdown ends, plays the notification and keeps the
//! terminal window title in sync with the clock.
//!
//! ## Layout
//!
//! ```text
//!   1 1 min   2 5 min   3 10 min   4 15 min      presets, hidden while running
//!              [-]        [+]                    adjust, hidden while running
//!
//!          ████ ████    ████ ████
//!          █  █ █     █ █  █ █  █                clock face
//!          █  █ ████    █  █ █  █
//!          █  █    █  █ █  █ █  █
//!          ████ ████    ████ ████
//!
//!            ↺ reset      ▶ start                controls
//!   ▲ +1 min • ▼ -1 min • enter start/stop ...   hints, hidden while running
//! ```
//!
//! ## Running
//!
//! ```rust,no_run
//! use countdown_tea::view::Model;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let program = bubbletea_rs::Program::<Model>::builder()
//!         .alt_screen(true)
//!         .build()?;
//!     program.run().await?;
//!     Ok(())
//! }
//! ```

pub mod effects;
pub mod keys;
pub mod style;


pub use effects::{Bell, CommandNotifier, Notifier, Silent, TerminalTitle, TitleSink};
pub use keys::{Command, TimerKeyMap};
pub use style::TimerStyles;

use crate::clock::{self, MINUTE, MIN_SECONDS, SECOND};
use crate::config::{self, Config};
use crate::countdown::{self, EndMsg};
use crate::{digits, help};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::lipgloss;
use std::time::Duration;

/// How long the face flashes after the countdown ends.
pub const DONE_FLASH: Duration = Duration::from_secs(2);

/// Ends the "done" flash started by the countdown with the same id.
#[derive(Debug, Clone)]
pub struct DoneClearMsg {
    id: i64,
    generation: u64,
}

/// The timer screen.
pub struct Model {
    countdown: countdown::Model,
    keys: TimerKeyMap,
    help: help::Model,
    styles: TimerStyles,
    notifier: Box<dyn Notifier>,
    title: Box<dyn TitleSink>,
    show_done: bool,
    done_generation: u64,
    last_title: Option<String>,
    width: usize,
}

impl Model {
    /// Creates a stopped timer ringing the terminal bell and writing the
    /// window title.
    pub fn new(seconds: u32, interval: Duration) -> Self {
        Self {
            countdown: countdown::new_with_interval(seconds, interval),
            keys: TimerKeyMap::default(),
            help: help::Model::new(),
            styles: TimerStyles::default(),
            notifier: Box::new(Bell),
            title: Box::new(TerminalTitle),
            show_done: false,
            done_generation: 0,
            last_title: None,
            width: 0,
        }
    }

    /// Creates a timer from command-line settings.
    pub fn from_config(config: &Config) -> Self {
        let notifier: Box<dyn Notifier> = if config.no_sound {
            Box::new(Silent)
        } else if let Some((program, args)) = config.sound_command_parts() {
            Box::new(CommandNotifier::new(program, args))
        } else {
            Box::new(Bell)
        };
        Self::new(config.duration, config.interval()).with_notifier(notifier)
    }

    /// Replaces the notification sink.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replaces the window title sink.
    pub fn with_title_sink(mut self, title: Box<dyn TitleSink>) -> Self {
        self.title = title;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: TimerStyles) -> Self {
        self.styles = styles;
        self
    }

    // The title is written before the first message arrives.
    fn with_initial_title(mut self) -> Self {
        self.sync_title();
        self
    }

    /// The underlying countdown.
    pub fn countdown(&self) -> &countdown::Model {
        &self.countdown
    }

    /// Whether the "done" flash is showing.
    pub fn show_done(&self) -> bool {
        self.show_done
    }

    /// Whether the full hint view is open.
    pub fn show_full_help(&self) -> bool {
        self.help.show_all
    }

    /// The window title for the current clock face.
    pub fn title(&self) -> String {
        format!("Timer: {}", self.countdown.view())
    }

    /// Handles key presses, countdown messages and resizes.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let cmd = self.route(msg);
        self.keys.set_running(self.countdown.is_running());
        self.sync_title();
        cmd
    }

    fn route(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(end) = msg.downcast_ref::<EndMsg>() {
            if end.id != self.countdown.id() {
                return None;
            }
            return self.finish();
        }

        if let Some(clear) = msg.downcast_ref::<DoneClearMsg>() {
            // A newer flash owns the face until its own clear arrives.
            if clear.id == self.countdown.id() && clear.generation == self.done_generation {
                self.show_done = false;
            }
            return None;
        }

        if let Some(size) = msg.downcast_ref::<bubbletea_rs::WindowSizeMsg>() {
            self.width = size.width as usize;
            self.help.width = self.width;
            return None;
        }

        self.countdown.update(msg)
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let command = self.keys.dispatch(key_msg)?;
        tracing::debug!(?command, "key command");
        self.apply(command)
    }

    /// Performs a view command.
    pub fn apply(&mut self, command: Command) -> Option<Cmd> {
        match command {
            Command::StartStop => {
                if self.countdown.is_running() {
                    self.countdown.pause();
                    None
                } else {
                    self.countdown.start()
                }
            }
            Command::Reset => {
                self.countdown.reset();
                None
            }
            Command::AddMinute => self.add_time(MINUTE),
            Command::RemoveMinute => self.reduce_time(MINUTE),
            Command::AddFiveMinutes => self.add_time(5 * MINUTE),
            Command::AddSecond => self.add_time(SECOND),
            Command::RemoveSecond => self.reduce_time(SECOND),
            Command::Preset(seconds) => {
                self.countdown.set_seconds(seconds);
                None
            }
            Command::PlaySound => {
                self.notifier.notify();
                None
            }
            Command::ToggleHelp => {
                self.help.show_all = !self.help.show_all;
                None
            }
            Command::Quit => {
                self.countdown.release();
                Some(bubbletea_rs::quit())
            }
        }
    }

    fn add_time(&mut self, seconds: u32) -> Option<Cmd> {
        if !self.countdown.is_running() {
            self.countdown.update_seconds(|s| s.saturating_add(seconds));
        }
        None
    }

    fn reduce_time(&mut self, seconds: u32) -> Option<Cmd> {
        if !self.countdown.is_running() {
            self.countdown
                .update_seconds(|s| s.saturating_sub(seconds).max(MIN_SECONDS));
        }
        None
    }

    fn finish(&mut self) -> Option<Cmd> {
        tracing::info!(id = self.countdown.id(), "countdown finished");
        self.show_done = true;
        self.done_generation += 1;
        self.notifier.notify();

        let id = self.countdown.id();
        let generation = self.done_generation;
        Some(bubbletea_tick(DONE_FLASH, move |_| {
            Box::new(DoneClearMsg { id, generation }) as Msg
        }))
    }

    fn sync_title(&mut self) {
        let title = self.title();
        if self.last_title.as_deref() == Some(title.as_str()) {
            return;
        }
        self.title.set_title(&title);
        self.last_title = Some(title);
    }

    /// Renders the whole screen.
    pub fn view(&self) -> String {
        let running = self.countdown.is_running();

        let presets = if running {
            String::new()
        } else {
            [
                (&self.keys.one_minute, "1 min"),
                (&self.keys.five_minutes, "5 min"),
                (&self.keys.ten_minutes, "10 min"),
                (&self.keys.fifteen_minutes, "15 min"),
            ]
            .iter()
            .map(|(binding, label)| self.button(&binding.help().key, label))
            .collect::<Vec<_>>()
            .join("   ")
        };

        let adjust = if running {
            String::new()
        } else {
            format!(
                "{}        {}",
                self.styles.control.clone().inline(true).render("[-]"),
                self.styles.control.clone().inline(true).render("[+]")
            )
        };

        let face_style = if self.show_done {
            &self.styles.face_done
        } else if running {
            &self.styles.face_running
        } else {
            &self.styles.face
        };
        let face = face_style.clone().render(&digits::render(&self.countdown.view()));

        let controls = if running {
            self.styles.control.clone().inline(true).render("⏸ pause")
        } else {
            format!(
                "{}      {}",
                self.styles.control.clone().inline(true).render("↺ reset"),
                self.styles.control.clone().inline(true).render("▶ start")
            )
        };

        let hints = if running {
            String::new()
        } else {
            self.help.view(&self.keys)
        };

        [
            presets,
            String::new(),
            adjust,
            String::new(),
            face,
            String::new(),
            controls,
            String::new(),
            hints,
        ]
        .iter()
        .map(|block| self.center(block))
        .collect::<Vec<_>>()
        .join("\n")
    }

    fn button(&self, key: &str, label: &str) -> String {
        format!(
            "{} {}",
            self.styles.kbd.clone().inline(true).render(key),
            self.styles.button.clone().inline(true).render(label)
        )
    }

    // Centers a block as a unit so multi-line glyphs stay aligned.
    fn center(&self, block: &str) -> String {
        let block_width = block
            .lines()
            .map(|line| lipgloss::width_visible(line))
            .max()
            .unwrap_or(0);
        let pad = " ".repeat(self.width.saturating_sub(block_width) / 2);
        block
            .lines()
            .map(|line| format!("{pad}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let config = config::current();
        (Self::from_config(&config).with_initial_title(), None)
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
        Self::new(clock::DEFAULT_SECONDS, countdown::DEFAULT_INTERVAL)
    }
}
