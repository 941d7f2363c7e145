//! SVG styling primitives: colors, text anchoring, and the process-wide chart theme.

use std::fmt;
use std::sync::OnceLock;

/// Fill or stroke color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#0000ff")
    Hex(String),
    /// CSS color keyword (e.g., "blue")
    Named(String),
}

impl ChartColor {
    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Create a color from a CSS keyword.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }

    /// Interpret a user-supplied color: `#`-prefixed values are hex, anything else a keyword.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.starts_with('#') {
            Self::hex(value)
        } else {
            Self::named(value)
        }
    }

    /// Whether the value is a well-formed `#rgb`/`#rrggbb` color or an alphabetic keyword.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Hex(h) => {
                let digits = h.trim_start_matches('#');
                h.starts_with('#')
                    && matches!(digits.len(), 3 | 6)
                    && digits.chars().all(|c| c.is_ascii_hexdigit())
            }
            Self::Named(name) => !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()),
        }
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.to_ascii_lowercase(),
            Self::Named(name) => name.to_ascii_lowercase(),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

pub const DEFAULT_FONT_FAMILY: &str = "Times New Roman";

/// Typography and neutral colors shared by every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub font_family: String,
    pub font_size: f64,
    pub text_color: ChartColor,
    pub axis_color: ChartColor,
    pub grid_color: ChartColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: 10.0,
            text_color: ChartColor::hex("#000000"),
            axis_color: ChartColor::hex("#000000"),
            grid_color: ChartColor::hex("#b0b0b0"),
        }
    }
}

impl ChartTheme {
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }
}

/// A theme slot that can be set once. Later `init` calls are ignored.
#[derive(Debug, Default)]
pub struct ThemeCell {
    cell: OnceLock<ChartTheme>,
}

impl ThemeCell {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Install `theme`. Returns `false` if a theme was already in place.
    pub fn init(&self, theme: ChartTheme) -> bool {
        self.cell.set(theme).is_ok()
    }

    /// The installed theme, or the default one if nothing was installed.
    pub fn get(&self) -> &ChartTheme {
        self.cell.get_or_init(ChartTheme::default)
    }
}

static GLOBAL_THEME: ThemeCell = ThemeCell::new();

/// Install the process-wide chart theme. Only the first call has effect.
pub fn init_theme(theme: ChartTheme) -> bool {
    GLOBAL_THEME.init(theme)
}

/// The process-wide chart theme.
#[must_use]
pub fn theme() -> &'static ChartTheme {
    GLOBAL_THEME.get()
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
