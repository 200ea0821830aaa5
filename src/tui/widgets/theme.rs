//! Centralized theme and styling constants.

use ratatui::style::{Color, Modifier, Style};

use crate::grid::ItemColor;

/// Theme constants for consistent styling across components.
pub struct Theme;

impl Theme {
    // Items
    pub const ITEM_OUTLINE: Color = Color::Black;
    pub const ITEM_LABEL: Color = Color::Black;
    pub const FOCUS_OUTLINE: Color = Color::Red;

    // Item fill, as HSL
    pub const ITEM_SATURATION: f64 = 0.7;
    pub const ITEM_LIGHTNESS: f64 = 0.7;

    // Status bar
    pub const KEY: Style = Style::new().fg(Color::Cyan);
    pub const VALUE: Style = Style::new().fg(Color::Yellow);
    pub const DIM: Style = Style::new().fg(Color::DarkGray);
    pub const ANIMATING: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

    // UI chrome
    pub const BORDER_FOCUSED: Color = Color::Cyan;

    /// Fill colour for an item.
    pub fn item_fill(color: ItemColor) -> Color {
        let (r, g, b) = hsl_to_rgb(color.hue, Self::ITEM_SATURATION, Self::ITEM_LIGHTNESS);
        Color::Rgb(r, g, b)
    }
}

#[allow(clippy::cast_sign_loss)]
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - 2.0f64.mul_add(lightness, -1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (red, green, blue) = match sector as u8 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    let lift = lightness - chroma / 2.0;
    let channel = |value: f64| ((value + lift) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(red), channel(green), channel(blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), (255, 0, 0));
    }

    #[test]
    fn test_item_fill_is_pastel() {
        // hsl(0, 70%, 70%) = rgb(232, 125, 125)
        assert_eq!(
            Theme::item_fill(ItemColor { hue: 0.0 }),
            Color::Rgb(232, 125, 125)
        );
    }
}
