//! Theme configuration for the desktop app

/// Environment variable selecting `light` or `dark`
pub const THEME_ENV: &str = "MARKNOTE_THEME";

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    Light,
    #[default]
    Dark,
}

impl ResolvedTheme {
    /// Read the theme from the environment, defaulting to dark
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(std::env::var(THEME_ENV).ok().as_deref())
    }

    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("light") => Self::Light,
            Some("dark") | None => Self::Dark,
            Some(other) => {
                tracing::warn!("Unknown {} value '{}', using dark", THEME_ENV, other);
                Self::Dark
            }
        }
    }

    /// `data-theme` attribute value
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
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

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_page: &'static str,
    pub bg_card: &'static str,
    pub bg_input: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub danger_soft: &'static str,
    pub button_text: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_page: "#f4f4f5",
    bg_card: "#ffffff",
    bg_input: "#f4f4f5",
    text_primary: "#11181c",
    text_secondary: "#71717a",
    border: "#e4e4e7",
    primary: "#006fee",
    warning: "#f5a524",
    danger: "#f31260",
    danger_soft: "#fee7ef",
    button_text: "#ffffff",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_page: "#000000",
    bg_card: "#18181b",
    bg_input: "#27272a",
    text_primary: "#ecedee",
    text_secondary: "#a1a1aa",
    border: "#3f3f46",
    primary: "#006fee",
    warning: "#f5a524",
    danger: "#f31260",
    danger_soft: "#310413",
    button_text: "#ffffff",
};
