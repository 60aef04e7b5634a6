//! Contexts provided at the application root.
//!
//! Language and theme are independent of each other; the auth context holds
//! the session and, when the bundle was built with Supabase credentials, the
//! service used to talk to it.

use std::rc::Rc;

use common::account::{AccountError, Profile, Session};
use common::i18n::{Language, Text};
use common::theme::Theme;
use yew::prelude::*;

use crate::services::supabase::SupabaseService;

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl LanguageContext {
    pub fn t(&self, text: Text) -> &'static str {
        self.language.t(text)
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

impl ThemeContext {
    pub fn pick<'a>(&self, dark: &'a str, light: &'a str) -> &'a str {
        self.theme.pick(dark, light)
    }
}

/// Changes the account components report back to the root.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
    ProfileChanged(Profile),
}

impl AuthEvent {
    /// A rejected access token ends the local session too.
    pub fn after_error(err: &AccountError) -> Option<Self> {
        matches!(err, AccountError::SessionExpired).then_some(AuthEvent::SignedOut)
    }
}

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub session: Option<Session>,
    pub profile: Option<Profile>,
    pub service: Option<Rc<SupabaseService>>,
    pub on_change: Callback<AuthEvent>,
}

impl AuthContext {
    /// Account failures worth reporting back to the root.
    pub fn on_error(&self) -> Callback<AccountError> {
        let on_change = self.on_change.clone();
        Callback::from(move |err: AccountError| {
            if let Some(event) = AuthEvent::after_error(&err) {
                on_change.emit(event);
            }
        })
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Profile name, then the local part of the account email.
    pub fn display_name(&self) -> Option<String> {
        let from_profile = self
            .profile
            .as_ref()
            .map(|profile| profile.name.trim())
            .filter(|name| !name.is_empty());
        from_profile.map(str::to_string).or_else(|| {
            let email = self.email()?;
            email.split('@').next().map(str::to_string)
        })
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.user.email.as_deref())
    }

    /// Up to two initials for the avatar bubble.
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name()
            .unwrap_or_default()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::account::User;

    fn context(name: &str, email: Option<&str>) -> AuthContext {
        AuthContext {
            session: Some(Session {
                access_token: "token".into(),
                refresh_token: None,
                expires_at: None,
                user: User {
                    id: "u1".into(),
                    email: email.map(str::to_string),
                },
            }),
            profile: Some(Profile {
                id: "u1".into(),
                name: name.into(),
                email: email.unwrap_or_default().into(),
                avatar_url: None,
            }),
            service: None,
            on_change: Callback::noop(),
        }
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(context("Alena", Some("alena@b.by")).display_name().as_deref(), Some("Alena"));
        assert_eq!(context("  ", Some("alena@b.by")).display_name().as_deref(), Some("alena"));
        assert_eq!(context("", None).display_name(), None);
    }

    #[test]
    fn initials_take_two_words() {
        assert_eq!(context("яна кавалёва ivanovna", None).initials(), "ЯК");
        assert_eq!(context("", Some("bob@x.io")).initials(), "B");
        assert_eq!(context("", None).initials(), "U");
    }

    #[test]
    fn expired_session_errors_sign_out() {
        assert_eq!(
            AuthEvent::after_error(&AccountError::SessionExpired),
            Some(AuthEvent::SignedOut)
        );
        assert_eq!(AuthEvent::after_error(&AccountError::InvalidCredentials), None);
    }
}
