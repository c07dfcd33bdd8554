//! Colors and markup role themes

use crate::markup::Role;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channels scaled to `0.0..=1.0` for PDF operators
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

/// Maps markup roles to concrete colors for one document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub brand: Color,
    pub muted: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub light: Color,
}

impl Theme {
    /// Color for `role`, or `fallback` for unstyled text
    pub fn resolve(&self, role: Option<Role>, fallback: Color) -> Color {
        match role {
            None => fallback,
            Some(Role::Brand) => self.brand,
            Some(Role::Muted) => self.muted,
            Some(Role::Success) => self.success,
            Some(Role::Warning) => self.warning,
            Some(Role::Danger) => self.danger,
            Some(Role::Light) => self.light,
            Some(Role::White) => Color::WHITE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: Color::rgb(0x7c, 0x3a, 0xed),
            muted: Color::rgb(0x6b, 0x72, 0x80),
            success: Color::rgb(0x10, 0xb9, 0x81),
            warning: Color::rgb(0xf5, 0x9e, 0x0b),
            danger: Color::rgb(0xef, 0x44, 0x44),
            light: Color::rgb(0xc4, 0xb5, 0xfd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#7c3aed"), Some(Color::rgb(124, 58, 237)));
        assert_eq!(Color::from_hex("ffffff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_theme_resolve() {
        let theme = Theme::default();
        assert_eq!(theme.resolve(None, Color::BLACK), Color::BLACK);
        assert_eq!(theme.resolve(Some(Role::Danger), Color::BLACK), theme.danger);
        assert_eq!(theme.resolve(Some(Role::White), Color::BLACK), Color::WHITE);
    }
}
