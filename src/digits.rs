//! Large glyphs for the clock face.
//!
//! Each glyph is five rows tall. Digits are four cells wide and the colon
//! is two; [`render`] joins glyphs with one blank column between them.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Rows per glyph.
pub const HEIGHT: usize = 5;

static GLYPHS: Lazy<HashMap<char, [&'static str; HEIGHT]>> = Lazy::new(|| {
    HashMap::from([
        ('0', ["████", "█  █", "█  █", "█  █", "████"]),
        ('1', ["  █ ", " ██ ", "  █ ", "  █ ", " ███"]),
        ('2', ["████", "   █", "████", "█   ", "████"]),
        ('3', ["████", "   █", " ███", "   █", "████"]),
        ('4', ["█  █", "█  █", "████", "   █", "   █"]),
        ('5', ["████", "█   ", "████", "   █", "████"]),
        ('6', ["████", "█   ", "████", "█  █", "████"]),
        ('7', ["████", "   █", "  █ ", " █  ", " █  "]),
        ('8', ["████", "█  █", "████", "█  █", "████"]),
        ('9', ["████", "█  █", "████", "   █", "████"]),
        (':', ["  ", "██", "  ", "██", "  "]),
    ])
});

const BLANK: [&str; HEIGHT] = ["    "; HEIGHT];

/// Renders `text` in large glyphs, one line per glyph row.
///
/// Characters without a glyph render as a blank digit-sized cell.
///
/// ```rust
/// use countdown_tea::digits::{render, HEIGHT};
///
/// let face = render("05:00");
/// assert_eq!(face.lines().count(), HEIGHT);
/// ```
pub fn render(text: &str) -> String {
    let glyphs: Vec<&[&str; HEIGHT]> = text
        .chars()
        .map(|ch| GLYPHS.get(&ch).unwrap_or(&BLANK))
        .collect();

    (0..HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|glyph| glyph[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
