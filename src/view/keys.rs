//! Key bindings for the timer view.
//!
//! ## Keys
//!
//! - **Start/Stop**: `enter`, `space`
//! - **Reset**: `esc`, `r`, `backspace`, `delete`
//! - **Adjust**: `↑/+` and `↓/-` (one minute), `→/.` and `←/,` (one second),
//!   `5` (five minutes)
//! - **Presets**: `0` (zero), `1` (1 min), `2` (5 min), `3` (10 min), `4` (15 min)
//! - **Sound**: `b` plays the notification
//! - **Help**: `?` toggles the full hint view
//! - **Quit**: `q`, `ctrl+c`

use crate::key::{Binding, KeyMap, KeyPress};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// An action the timer view can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start when stopped, pause when running.
    StartStop,
    /// Restore the last started duration.
    Reset,
    /// Add one minute.
    AddMinute,
    /// Remove one minute.
    RemoveMinute,
    /// Add five minutes.
    AddFiveMinutes,
    /// Add one second.
    AddSecond,
    /// Remove one second.
    RemoveSecond,
    /// Set an absolute number of seconds.
    Preset(u32),
    /// Play the notification sound.
    PlaySound,
    /// Toggle the full hint view.
    ToggleHelp,
    /// Leave the program.
    Quit,
}

/// Key bindings for every [`Command`].
#[derive(Debug, Clone)]
pub struct TimerKeyMap {
    /// Start or pause.
    pub start_stop: Binding,
    /// Reset to the last started duration.
    pub reset: Binding,
    /// Add one minute.
    pub add_minute: Binding,
    /// Remove one minute.
    pub remove_minute: Binding,
    /// Play the notification.
    pub play_sound: Binding,
    /// Set zero.
    pub zero: Binding,
    /// Set one minute.
    pub one_minute: Binding,
    /// Set five minutes.
    pub five_minutes: Binding,
    /// Set ten minutes.
    pub ten_minutes: Binding,
    /// Set fifteen minutes.
    pub fifteen_minutes: Binding,
    /// Add five minutes.
    pub add_five_minutes: Binding,
    /// Add one second.
    pub add_second: Binding,
    /// Remove one second.
    pub remove_second: Binding,
    /// Toggle full help.
    pub help: Binding,
    /// Quit.
    pub quit: Binding,
}

impl Default for TimerKeyMap {
    fn default() -> Self {
        Self {
            start_stop: Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter", "start/stop"),
            reset: Binding::new(vec![
                KeyCode::Esc,
                KeyCode::Char('r'),
                KeyCode::Backspace,
                KeyCode::Delete,
            ])
            .with_help("esc", "reset"),
            add_minute: Binding::new(vec![KeyCode::Up, KeyCode::Char('+')])
                .with_help("▲", "+1 min"),
            remove_minute: Binding::new(vec![KeyCode::Down, KeyCode::Char('-')])
                .with_help("▼", "-1 min"),
            play_sound: Binding::new(vec![KeyCode::Char('b')]).with_help("b", "sound"),
            zero: Binding::new(vec![KeyCode::Char('0')]).with_help("0", "zero"),
            one_minute: Binding::new(vec![KeyCode::Char('1')]).with_help("1", "1 min"),
            five_minutes: Binding::new(vec![KeyCode::Char('2')]).with_help("2", "5 min"),
            ten_minutes: Binding::new(vec![KeyCode::Char('3')]).with_help("3", "10 min"),
            fifteen_minutes: Binding::new(vec![KeyCode::Char('4')]).with_help("4", "15 min"),
            add_five_minutes: Binding::new(vec![KeyCode::Char('5')]).with_help("5", "+5 min"),
            add_second: Binding::new(vec![KeyCode::Char('.'), KeyCode::Right])
                .with_help("►", "+1 sec"),
            remove_second: Binding::new(vec![KeyCode::Char(','), KeyCode::Left])
                .with_help("◄", "-1 sec"),
            help: Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            quit: Binding::new(vec![
                KeyPress::from(KeyCode::Char('q')),
                KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ])
            .with_help("q", "quit"),
        }
    }
}

impl TimerKeyMap {
    /// The dispatch table in priority order.
    pub fn commands(&self) -> [(&Binding, Command); 15] {
        use crate::clock::MINUTE;
        [
            (&self.start_stop, Command::StartStop),
            (&self.reset, Command::Reset),
            (&self.add_minute, Command::AddMinute),
            (&self.remove_minute, Command::RemoveMinute),
            (&self.play_sound, Command::PlaySound),
            (&self.zero, Command::Preset(0)),
            (&self.one_minute, Command::Preset(MINUTE)),
            (&self.five_minutes, Command::Preset(5 * MINUTE)),
            (&self.ten_minutes, Command::Preset(10 * MINUTE)),
            (&self.fifteen_minutes, Command::Preset(15 * MINUTE)),
            (&self.add_five_minutes, Command::AddFiveMinutes),
            (&self.add_second, Command::AddSecond),
            (&self.remove_second, Command::RemoveSecond),
            (&self.help, Command::ToggleHelp),
            (&self.quit, Command::Quit),
        ]
    }

    /// Maps a key press to a command; the first matching binding wins.
    pub fn dispatch(&self, msg: &KeyMsg) -> Option<Command> {
        self.commands()
            .into_iter()
            .find(|(binding, _)| binding.matches(msg))
            .map(|(_, command)| command)
    }

    /// Enables or disables bindings that only make sense while stopped.
    pub fn set_running(&mut self, running: bool) {
        for binding in [
            &mut self.add_minute,
            &mut self.remove_minute,
            &mut self.add_five_minutes,
            &mut self.add_second,
            &mut self.remove_second,
        ] {
            binding.set_enabled(!running);
        }
    }
}

impl KeyMap for TimerKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.add_minute,
            &self.remove_minute,
            &self.start_stop,
            &self.reset,
            &self.help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.start_stop, &self.reset, &self.play_sound, &self.quit],
            vec![
                &self.add_minute,
                &self.remove_minute,
                &self.add_second,
                &self.remove_second,
                &self.add_five_minutes,
            ],
            vec![
                &self.zero,
                &self.one_minute,
                &self.five_minutes,
                &self.ten_minutes,
                &self.fifteen_minutes,
            ],
            vec![&self.help],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_dispatch_table() {
        let keys = TimerKeyMap::default();
        let cases = [
            (KeyCode::Enter, Command::StartStop),
            (KeyCode::Char(' '), Command::StartStop),
            (KeyCode::Esc, Command::Reset),
            (KeyCode::Char('r'), Command::Reset),
            (KeyCode::Backspace, Command::Reset),
            (KeyCode::Delete, Command::Reset),
            (KeyCode::Up, Command::AddMinute),
            (KeyCode::Char('+'), Command::AddMinute),
            (KeyCode::Down, Command::RemoveMinute),
            (KeyCode::Char('-'), Command::RemoveMinute),
            (KeyCode::Char('b'), Command::PlaySound),
            (KeyCode::Char('0'), Command::Preset(0)),
            (KeyCode::Char('1'), Command::Preset(60)),
            (KeyCode::Char('2'), Command::Preset(300)),
            (KeyCode::Char('3'), Command::Preset(600)),
            (KeyCode::Char('4'), Command::Preset(900)),
            (KeyCode::Char('5'), Command::AddFiveMinutes),
            (KeyCode::Char('.'), Command::AddSecond),
            (KeyCode::Right, Command::AddSecond),
            (KeyCode::Char(','), Command::RemoveSecond),
            (KeyCode::Left, Command::RemoveSecond),
            (KeyCode::Char('?'), Command::ToggleHelp),
            (KeyCode::Char('q'), Command::Quit),
        ];
        for (code, expected) in cases {
            assert_eq!(keys.dispatch(&press(code)), Some(expected), "{code:?}");
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let keys = TimerKeyMap::default();
        let msg = KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(keys.dispatch(&msg), Some(Command::Quit));
    }

    #[test]
    fn test_unbound_key() {
        let keys = TimerKeyMap::default();
        assert_eq!(keys.dispatch(&press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_first_match_wins() {
        let mut keys = TimerKeyMap::default();
        keys.play_sound = Binding::new(vec![KeyCode::Esc]);
        // Reset sits earlier in the table than the sound binding.
        assert_eq!(keys.dispatch(&press(KeyCode::Esc)), Some(Command::Reset));
    }

    #[test]
    fn test_running_disables_adjustments() {
        let mut keys = TimerKeyMap::default();
        keys.set_running(true);
        assert_eq!(keys.dispatch(&press(KeyCode::Up)), None);
        assert_eq!(keys.dispatch(&press(KeyCode::Char('5'))), None);
        assert_eq!(
            keys.dispatch(&press(KeyCode::Enter)),
            Some(Command::StartStop)
        );
        assert_eq!(keys.dispatch(&press(KeyCode::Char('2'))), Some(Command::Preset(300)));

        keys.set_running(false);
        assert_eq!(keys.dispatch(&press(KeyCode::Up)), Some(Command::AddMinute));
    }
}
