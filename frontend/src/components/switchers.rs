//! Language and theme switchers shown in the header and the mobile menu.

use common::i18n::{Language, Text};
use common::theme::Theme;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::contexts::{LanguageContext, ThemeContext};

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let Some(language) = use_context::<LanguageContext>() else {
        return html! {};
    };

    let onchange = {
        let set_language = language.set_language.clone();
        Callback::from(move |event: Event| {
            let selected = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
                .and_then(|select| Language::from_code(&select.value()));
            if let Some(selected) = selected {
                set_language.emit(selected);
            }
        })
    };

    html! {
        <label class="switcher">
            <span class="switcher-label">{ language.t(Text::LanguageTitle) }</span>
            <select {onchange} aria-label={language.t(Text::LanguageTitle)}>
                { for Language::ALL.iter().map(|option| html! {
                    <option value={option.code()} selected={*option == language.language}>
                        { option.native_name() }
                    </option>
                }) }
            </select>
        </label>
    }
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher() -> Html {
    let (Some(language), Some(theme)) = (use_context::<LanguageContext>(), use_context::<ThemeContext>()) else {
        return html! {};
    };

    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let icon = match theme.theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };
    let label = language.t(theme.theme.switch_label());

    html! {
        <button class="icon-button theme-switcher" {onclick} title={label} aria-label={label}>
            { icon }
        </button>
    }
}
