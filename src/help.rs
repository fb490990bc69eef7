//! Key-hint bar.
//!
//! Renders the bindings of any [`KeyMap`] either as a single line of
//! `key description` pairs or, when [`Model::show_all`] is set, as columns
//! of grouped bindings. Disabled bindings are skipped, so a component can
//! hide hints for actions that are unavailable in its current state.
//!
//! ```rust
//! use countdown_tea::help::Model;
//! use countdown_tea::key::{Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! struct Keys {
//!     start: Binding,
//!     reset: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.start, &self.reset]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.start], vec![&self.reset]]
//!     }
//! }
//!
//! let keys = Keys {
//!     start: Binding::new(vec![KeyCode::Enter]).with_help("enter", "start/stop"),
//!     reset: Binding::new(vec![KeyCode::Esc]).with_help("esc", "reset"),
//! };
//!
//! let help = Model::new();
//! let bar = lipgloss_extras::lipgloss::strip_ansi(&help.view(&keys));
//! assert_eq!(bar, "enter start/stop • esc reset");
//! ```

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the hint bar.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the truncation marker.
    pub ellipsis: Style,
    /// Key label style.
    pub key: Style,
    /// Description style.
    pub desc: Style,
    /// Separator style.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let separator = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: separator.clone(),
            key,
            desc,
            separator,
        }
    }
}

/// The hint bar.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render grouped columns instead of a single line.
    pub show_all: bool,
    /// Maximum width in cells; `0` means unlimited.
    pub width: usize,
    /// Separator between pairs in the single-line form.
    pub short_separator: String,
    /// Separator between columns in the full form.
    pub full_separator: String,
    /// Marker appended when content is cut off.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a single-line hint bar without a width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the width limit.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the hints for `keymap` in the current form.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    fn pair(&self, binding: &Binding) -> String {
        let help = binding.help();
        format!(
            "{} {}",
            self.styles.key.clone().inline(true).render(&help.key),
            self.styles.desc.clone().inline(true).render(&help.desc)
        )
    }

    /// Renders enabled bindings on one line, truncating at the width limit.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self
            .styles
            .separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;
        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let item = format!("{}{}", sep, self.pair(binding));
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.overflow_tail(total_width, item_width) {
                out.push_str(&tail);
                break;
            }
            total_width += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders each group as a column; groups with nothing enabled are skipped.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let separator = self
            .styles
            .separator
            .clone()
            .inline(true)
            .render(&self.full_separator);
        let separator_width = lipgloss::width_visible(&separator);

        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;
        for group in groups.iter().filter(|g| should_render_column(g)) {
            let column = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| self.pair(b))
                .collect::<Vec<_>>()
                .join("\n");
            let column_width = lipgloss::width_visible(&column)
                + if columns.is_empty() { 0 } else { separator_width };

            if let Some(tail) = self.overflow_tail(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }
            total_width += column_width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    // Returns the text to append when an item of `item_width` no longer fits.
    fn overflow_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles
                .ellipsis
                .clone()
                .inline(true)
                .render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) <= self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

/// Whether any binding in the column is enabled.
pub fn should_render_column(bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}
