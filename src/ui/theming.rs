// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use serde::{Deserialize, Serialize};

/// Which base theme the application renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn i18n_key(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }

    /// Resolves `System` against the OS preference, defaulting to light when
    /// detection fails.
    pub fn resolve(&self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => iced::Theme::Dark,
                _ => iced::Theme::Light,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_to_matching_theme() {
        assert_eq!(ThemeMode::Light.resolve(), iced::Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), iced::Theme::Dark);
    }

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn serde_round_trip_uses_lowercase() {
        let serialized = toml::to_string(&SerdeWrap {
            theme_mode: ThemeMode::Dark,
        })
        .unwrap();
        assert!(serialized.contains("dark"));
    }

    #[derive(Serialize)]
    struct SerdeWrap {
        theme_mode: ThemeMode,
    }
}
