//! Preferences and the account session persisted in `localStorage`.

use common::account::Session;
use common::i18n::Language;
use common::theme::Theme;
use gloo_console::warn;
use web_sys::Storage;

const LANGUAGE_KEY: &str = "language";
const THEME_KEY: &str = "theme";
const SESSION_KEY: &str = "session";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn get(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            warn!(format!("could not persist {key}"));
        }
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn load_language() -> Option<Language> {
    get(LANGUAGE_KEY).and_then(|code| Language::from_code(&code))
}

pub fn save_language(language: Language) {
    set(LANGUAGE_KEY, language.code());
}

/// Raw stored theme; [`Theme::resolve`] decides what it means.
pub fn load_theme() -> Option<String> {
    get(THEME_KEY)
}

pub fn save_theme(theme: Theme) {
    set(THEME_KEY, theme.as_str());
}

pub fn load_session() -> Option<Session> {
    let raw = get(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!(format!("dropping unreadable session: {err}"));
            remove(SESSION_KEY);
            None
        }
    }
}

pub fn save_session(session: &Session) {
    match serde_json::to_string(session) {
        Ok(raw) => set(SESSION_KEY, &raw),
        Err(err) => warn!(format!("could not serialize session: {err}")),
    }
}

pub fn clear_session() {
    remove(SESSION_KEY);
}
