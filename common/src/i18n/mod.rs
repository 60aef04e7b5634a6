//! Translation tables for the three UI languages.
//!
//! Every user-facing string lives in the [`Text`] enum. The table in `texts.rs`
//! is written with the `translations!` macro so that adding a variant without
//! providing all three languages is a compile error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI language. `En` is the default when nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Be,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ru, Language::Be];

    /// Two-letter code stored in `localStorage` and used for `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Be => "be",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            "be" => Some(Language::Be),
            _ => None,
        }
    }

    /// Name of the language written in that language, for the switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => Text::LanguageEn.in_language(self),
            Language::Ru => Text::LanguageRu.in_language(self),
            Language::Be => Text::LanguageBe.in_language(self),
        }
    }

    pub fn t(self, text: Text) -> &'static str {
        text.in_language(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

macro_rules! translations {
    ($( $variant:ident => { en: $en:expr, ru: $ru:expr, be: $be:expr $(,)? } ),* $(,)?) => {
        /// A translatable UI string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Text {
            $($variant),*
        }

        impl Text {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Text] = &[$(Text::$variant),*];

            pub fn in_language(self, language: Language) -> &'static str {
                match (self, language) {
                    $(
                        (Text::$variant, Language::En) => $en,
                        (Text::$variant, Language::Ru) => $ru,
                        (Text::$variant, Language::Be) => $be,
                    )*
                }
            }
        }
    };
}

mod texts;

pub use texts::Text;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_text_is_translated() {
        for text in Text::ALL {
            for language in Language::ALL {
                assert!(
                    !text.in_language(language).trim().is_empty(),
                    "{:?} has no {} translation",
                    text,
                    language
                );
            }
        }
    }

    #[test]
    fn language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code(" RU "), Some(Language::Ru));
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn switcher_shows_native_names() {
        assert_eq!(Language::Ru.native_name(), "Русский");
        assert_eq!(Language::Be.native_name(), "Беларуская");
        assert_eq!(Language::En.t(Text::ErrorNoGlb), "No GLB file found in the results");
    }
}
