//! Side effects of the timer view: the notification sound and the window
//! title. Both are fire-and-forget; failures are logged and dropped.

use crossterm::execute;
use crossterm::terminal::SetTitle;
use std::io::{self, Write};
use std::process::Stdio;
use tokio::process::Command;

/// Plays the end-of-countdown notification.
pub trait Notifier: Send {
    /// Starts the notification and returns immediately.
    fn notify(&mut self);
}

/// Receives the window title whenever the clock face changes.
pub trait TitleSink: Send {
    /// Writes `title`.
    fn set_title(&mut self, title: &str);
}

/// Rings the terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bell;

impl Notifier for Bell {
    fn notify(&mut self) {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            tracing::warn!("failed to ring terminal bell: {e}");
        }
    }
}

/// Spawns an external player and reaps it from a background task.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    program: String,
    args: Vec<String>,
}

impl CommandNotifier {
    /// Creates a notifier running `program` with `args`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Notifier for CommandNotifier {
    fn notify(&mut self) {
        // Spawning registers the child with the runtime's process driver.
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(program = %self.program, "no runtime to run notification");
            return;
        };
        let _guard = runtime.enter();

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!(program = %self.program, "failed to start notification: {e}");
                return;
            }
        };

        tracing::debug!(pid = child.id(), program = %self.program, "notification started");
        let program = self.program.clone();
        runtime.spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    tracing::warn!(%program, %status, "notification player failed")
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(%program, "failed to wait for notification: {e}"),
            }
        });
    }
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Notifier for Silent {
    fn notify(&mut self) {}
}

/// Writes the terminal window title.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalTitle;

impl TitleSink for TerminalTitle {
    fn set_title(&mut self, title: &str) {
        if let Err(e) = execute!(io::stdout(), SetTitle(title)) {
            tracing::warn!("failed to set window title: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // Children of this process left in the zombie state.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        let Ok(entries) = std::fs::read_dir("/proc") else {
            return 0;
        };
        entries
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // The command name is parenthesised and may contain spaces.
                let Some(end) = stat.rfind(')') else {
                    return false;
                };
                let mut fields = stat[end + 1..].split_whitespace();
                let state = fields.next();
                let ppid = fields.next();
                state == Some("Z") && ppid == Some(me.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_command_notifier_reaps_player() {
        let mut notifier = CommandNotifier::new("true", vec![]);
        for _ in 0..3 {
            notifier.notify();
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(zombie_children(), 0);
    }

    #[test]
    fn test_command_notifier_without_runtime_is_silent() {
        let mut notifier = CommandNotifier::new("true", vec![]);
        notifier.notify();
    }

    #[tokio::test]
    async fn test_command_notifier_missing_program() {
        let mut notifier = CommandNotifier::new("countdown-tea-no-such-player", vec![]);
        notifier.notify();
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
