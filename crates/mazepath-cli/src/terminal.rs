//! Terminal styling and color detection.
//!
//! The matrix renderer paints start, goal, path and wall symbols with raw
//! ANSI sequences. Everything here collapses to empty strings when color is
//! disabled, so callers never branch on capability themselves.

/// ANSI escape codes used by the renderers.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse green for the start cell.
    pub const START: &str = "\x1b[1;7;32m";
    /// Bold reverse magenta for the goal cell.
    pub const GOAL: &str = "\x1b[1;7;35m";
    /// Yellow for path markers.
    pub const PATH: &str = "\x1b[1;33m";
    /// Gray for pillars and closed walls.
    pub const WALL: &str = "\x1b[90m";
    /// Bright bold white for headings.
    pub const EMPHASIS: &str = "\x1b[1;97m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub start: &'static str,
    pub goal: &'static str,
    pub path: &'static str,
    pub wall: &'static str,
    pub emphasis: &'static str,
}

impl ColorPalette {
    /// Palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            start: colors::START,
            goal: colors::GOAL,
            path: colors::PATH,
            wall: colors::WALL,
            emphasis: colors::EMPHASIS,
        }
    }

    /// Palette with no colors.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            start: "",
            goal: "",
            path: "",
            wall: "",
            emphasis: "",
        }
    }

    /// Colored when the terminal supports it, plain otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Honour an explicit `--no-color` before falling back to detection.
    #[must_use]
    pub fn resolve(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::detect()
        }
    }

    pub fn is_plain(&self) -> bool {
        self.reset.is_empty()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` convention (<https://no-color.org/>) and
/// `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
