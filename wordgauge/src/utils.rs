use crossterm::event::{KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Color,
    widgets::{Block, BorderType},
};

/// A block with a rounded border
pub const ROUNDED_BLOCK: Block = Block::bordered().border_type(BorderType::Rounded);

pub fn center(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area_horizontal] = Layout::horizontal([horizontal])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([vertical])
        .flex(Flex::Center)
        .areas(area_horizontal);
    area
}

/// A trait defining helper methods for keyevents
pub trait KeyEventHelper {
    /// Returns true if the keyevent contains a pressed key
    fn is_press(&self) -> bool;

    /// Returns true if the keyevent contains the given modifiers
    fn has_mods(&self, mods: KeyModifiers) -> bool;
}

impl KeyEventHelper for KeyEvent {
    fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Press
    }

    fn has_mods(&self, mods: KeyModifiers) -> bool {
        self.modifiers.contains(mods)
    }
}

/// Blend `color` towards `background` by `percent` (0.0 leaves the color
/// untouched, 1.0 yields the background).
pub fn fade(color: Color, background: Color, percent: f32) -> Color {
    let (red, green, blue) = rgb_of(color);
    let (bg_red, bg_green, bg_blue) = rgb_of(background);

    let mix = |from: u8, to: u8| -> u8 {
        (f32::from(from) + (f32::from(to) - f32::from(from)) * percent).round() as u8
    };

    Color::Rgb(
        mix(red, bg_red),
        mix(green, bg_green),
        mix(blue, bg_blue),
    )
}

/// Resolve a ratatui color to RGB, going through the xterm-256 palette for
/// named and indexed colors.
fn rgb_of(color: Color) -> (u8, u8, u8) {
    let index = match color {
        Color::Rgb(red, green, blue) => return (red, green, blue),
        Color::Indexed(index) => index,
        Color::Black => 0,
        Color::Red => 1,
        Color::Green => 2,
        Color::Yellow => 3,
        Color::Blue => 4,
        Color::Magenta => 5,
        Color::Cyan => 6,
        Color::Gray => 7,
        Color::DarkGray => 8,
        Color::LightRed => 9,
        Color::LightGreen => 10,
        Color::LightYellow => 11,
        Color::LightBlue => 12,
        Color::LightMagenta => 13,
        Color::LightCyan => 14,
        Color::White => 15,
        Color::Reset => 7,
    };

    ansi_colours::rgb_from_ansi256(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let color = Color::Rgb(200, 100, 0);
        let background = Color::Rgb(0, 0, 0);

        assert_eq!(fade(color, background, 0.0), color);
        assert_eq!(fade(color, background, 1.0), background);
        assert_eq!(fade(color, background, 0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn test_fade_resolves_named_colors() {
        // Named colors go through the xterm palette and still blend to RGB
        let faded = fade(Color::Red, Color::Black, 0.5);
        assert!(matches!(faded, Color::Rgb(..)));
    }
}
