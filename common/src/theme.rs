//! Dark/light theme preference.

use serde::{Deserialize, Serialize};

use crate::i18n::Text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class name applied to the document root and stored in `localStorage`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Stored preference first, then the system `prefers-color-scheme`.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(Theme::parse) {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    /// Picks between the two class lists of a themed element.
    pub fn pick<'a>(self, dark: &'a str, light: &'a str) -> &'a str {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }

    /// Label of the switcher button, which always offers the other theme.
    pub fn switch_label(self) -> Text {
        match self {
            Theme::Dark => Text::ThemeSwitchToLight,
            Theme::Light => Text::ThemeSwitchToDark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn stored_preference_wins_over_system() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("garbage"), true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn pick_returns_matching_classes() {
        assert_eq!(Theme::Light.pick("bg-black", "bg-white"), "bg-white");
        assert_eq!(Theme::Dark.switch_label(), Text::ThemeSwitchToLight);
    }
}
