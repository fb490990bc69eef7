//! Styles for the timer view.

use lipgloss_extras::prelude::*;

/// Visual styles for each part of the timer screen.
#[derive(Debug, Clone)]
pub struct TimerStyles {
    /// Clock face while stopped.
    pub face: Style,
    /// Clock face while counting down.
    pub face_running: Style,
    /// Clock face during the "done" flash.
    pub face_done: Style,
    /// Key label inside a button, e.g. the `1` in `[1] 1 min`.
    pub kbd: Style,
    /// Button caption.
    pub button: Style,
    /// The start/stop and reset controls.
    pub control: Style,
}

impl Default for TimerStyles {
    fn default() -> Self {
        Self {
            face: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            face_running: Style::new().foreground(Color::from("#04B575")).bold(true),
            face_done: Style::new()
                .foreground(Color::from("#FF5F87"))
                .bold(true)
                .reverse(true),
            kbd: Style::new()
                .foreground(Color::from("#FFFDF5"))
                .background(Color::from("#6B50FF"))
                .padding(0, 1, 0, 1),
            button: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            control: Style::new().foreground(Color::from("#6B50FF")).bold(true),
        }
    }
}
