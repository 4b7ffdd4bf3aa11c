//! Terminal color theme system
//!
//! Provides palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with
//! AMAZED_LIGHT_BG=1.

use ratatui::style::Color;

/// Color theme for terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Hints and the key reference line
    pub text_dim: Color,
    /// Title and level headings
    pub accent: Color,

    // Borders
    pub border: Color,
    /// Level-complete window
    pub border_banner: Color,

    // Maze
    pub hedge: Color,
    pub floor: Color,
    pub trail: Color,
    pub goal: Color,
    pub player: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            accent: Color::Yellow,
            border: Color::White,
            border_banner: Color::Yellow,
            hedge: Color::Green,
            floor: Color::Reset,
            trail: Color::Yellow,
            goal: Color::LightMagenta,
            player: Color::LightYellow,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            accent: Color::Blue,
            border: Color::DarkGray,
            border_banner: Color::Blue,
            hedge: Color::Green,
            floor: Color::Reset,
            trail: Color::Red,
            goal: Color::Magenta,
            player: Color::Black,
        }
    }

    /// Auto-detect terminal background and return the matching theme.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("AMAZED_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with color indices (0-15); 7 and 9..=15 are light
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
