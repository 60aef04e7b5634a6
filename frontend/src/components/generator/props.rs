use common::i18n::Language;
use common::theme::Theme;
use yew::prelude::*;

/// Language and theme are passed down so the screen re-renders when they
/// change; its leaf components read the same values from context.
#[derive(Properties, PartialEq, Clone)]
pub struct GeneratorProps {
    pub language: Language,
    pub theme: Theme,
    #[prop_or_default]
    pub signed_in: bool,
}
