use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::Display;
use terminal_colorsaurus::QueryOptions;

/// The persisted appearance choice
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

impl Appearance {
    /// Returns the opposite appearance
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// General theme
///
/// `term_fg`/`term_bg` come before the palettes so the TOML serializer can
/// emit them as plain values.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Theme {
    pub term_fg: Color,
    pub term_bg: Color,
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        let terminal_palette = terminal_colorsaurus::color_palette(QueryOptions::default()).ok();

        let (term_fg, term_bg) = if let Some(palette) = terminal_palette {
            let fg = palette.foreground.scale_to_8bit();
            let bg = palette.background.scale_to_8bit();
            (Color::Rgb(fg.0, fg.1, fg.2), Color::Rgb(bg.0, bg.1, bg.2))
        } else {
            (Color::Rgb(255, 255, 255), Color::Rgb(0, 0, 0))
        };

        Self {
            term_fg,
            term_bg,
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }
}

impl Theme {
    /// Returns the palette for the given appearance
    pub const fn palette(&self, appearance: Appearance) -> &Palette {
        match appearance {
            Appearance::Light => &self.light,
            Appearance::Dark => &self.dark,
        }
    }
}

/// Colors for one appearance
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Palette {
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub highlight: Color,
    pub gauge: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            highlight: Color::Cyan,
            gauge: Color::Blue,
        }
    }

    pub const fn light() -> Self {
        Self {
            success: Color::Green,
            warning: Color::LightYellow,
            error: Color::LightRed,
            highlight: Color::Blue,
            gauge: Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appearance_toggles() {
        assert_eq!(Appearance::Light.toggled(), Appearance::Dark);
        assert_eq!(Appearance::Dark.toggled(), Appearance::Light);
        assert_eq!(Appearance::Dark.toggled().toggled(), Appearance::Dark);
    }

    #[test]
    fn test_appearance_serializes_as_lowercase() {
        assert_eq!(Appearance::Light.to_string(), "light");
        assert_eq!(Appearance::Dark.to_string(), "dark");
    }
}
