//! Theme configuration for the desktop app

pub use daybook_core::models::ThemeMode;

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Check if the theme is dark
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Resolve a settings theme mode to the rendered theme
#[must_use]
pub const fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
    }
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub surface: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#fdf6ec",
    bg_secondary: "#f7efe2",
    surface: "#fffdf8",
    text_primary: "#4e342e",
    text_secondary: "#7a5c52",
    text_muted: "#a1887f",
    border: "#e0d3c2",
    accent: "#6d4c41",
    accent_text: "#fdf6ec",
    error: "#c62828",
    success: "#2e7d32",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#211a16",
    bg_secondary: "#2a211c",
    surface: "#2f2620",
    text_primary: "#f0e6da",
    text_secondary: "#cbb8aa",
    text_muted: "#8d7b6f",
    border: "#4e4038",
    accent: "#d7ccc8",
    accent_text: "#211a16",
    error: "#ef9a9a",
    success: "#a5d6a7",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_maps_modes_one_to_one() {
        assert_eq!(resolve_theme(ThemeMode::Light), ResolvedTheme::Light);
        assert_eq!(resolve_theme(ThemeMode::Dark), ResolvedTheme::Dark);
        assert!(resolve_theme(ThemeMode::Dark).is_dark());
    }

    #[test]
    fn palettes_differ_between_themes() {
        assert_ne!(
            ResolvedTheme::Light.palette().bg_primary,
            ResolvedTheme::Dark.palette().bg_primary
        );
    }
}
