//! Account records, form validation and the account service contract.
//!
//! The concrete service lives in the browser crate and talks to Supabase;
//! everything here is transport-free. [`Accounts`] wraps a service together
//! with the current session and applies the rules every caller shares:
//! validate first, then require a signed-in user.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{Language, Text};
use crate::model::asset::Asset;

pub mod endpoints;

pub const MIN_PASSWORD_LEN: usize = 6;
/// Refresh this long before the access token runs out.
pub const REFRESH_MARGIN_SECS: u64 = 60;
const DEFAULT_MODEL_FORMAT: &str = "glb";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds at which the access token stops being accepted.
    #[serde(default)]
    pub expires_at: Option<u64>,
    pub user: User,
}

impl Session {
    /// Whether the token is expired or will be within the refresh margin.
    /// Sessions stored without an expiry are refreshed once to learn it.
    pub fn needs_refresh(&self, now: u64) -> bool {
        self.expires_at
            .is_none_or(|expires_at| now + REFRESH_MARGIN_SECS >= expires_at)
    }

    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Seconds until [`Session::needs_refresh`] turns true.
    pub fn refresh_in(&self, now: u64) -> u64 {
        self.expires_at
            .map_or(0, |expires_at| expires_at.saturating_sub(now + REFRESH_MARGIN_SECS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A row of the `models` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedModel {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub model_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub format: String,
    pub created_at: String,
}

impl SavedModel {
    pub fn asset(&self) -> Asset {
        Asset {
            url: self.model_url.clone(),
            name: self.name.clone(),
            format: self.format.clone(),
        }
    }
}

/// Insert payload for the `models` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewModel {
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub model_url: String,
    pub thumbnail_url: Option<String>,
    pub format: String,
}

/// What the save dialog collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveModelForm {
    pub name: String,
    pub description: String,
    pub asset: Option<Asset>,
    pub thumbnail_url: Option<String>,
}

impl SaveModelForm {
    pub fn into_new_model(self, user_id: &str) -> Result<NewModel, AccountError> {
        let asset = self
            .asset
            .filter(|asset| !asset.url.is_empty())
            .ok_or(AccountError::NoModel)?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AccountError::NameRequired(NameField::Model));
        }

        Ok(NewModel {
            user_id: user_id.to_string(),
            name: name.to_string(),
            description: self.description.trim().to_string(),
            format: model_format(&asset),
            model_url: asset.url,
            thumbnail_url: self.thumbnail_url.filter(|url| !url.is_empty()),
        })
    }
}

/// The asset format, or the URL's extension, or `glb`.
pub fn model_format(asset: &Asset) -> String {
    if !asset.format.is_empty() {
        return asset.format.to_lowercase();
    }
    let path = asset.url.split(['?', '#']).next().unwrap_or_default();
    let file = path.rsplit('/').next().unwrap_or_default();
    match file.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => DEFAULT_MODEL_FORMAT.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
}

impl ProfileUpdate {
    pub fn new(name: &str) -> Result<Self, AccountError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AccountError::NameRequired(NameField::Profile));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), AccountError> {
        if self.name.trim().is_empty() {
            return Err(AccountError::NameRequired(NameField::Profile));
        }
        if self.password != self.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AccountError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Which form a missing name belongs to; the messages differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Model,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("user not authenticated")]
    NotAuthenticated,
    #[error("session expired")]
    SessionExpired,
    #[error("invalid login credentials")]
    InvalidCredentials,
    #[error("email not confirmed")]
    EmailNotConfirmed,
    #[error("email already registered")]
    EmailExists,
    #[error("no model to save")]
    NoModel,
    #[error("name is required")]
    NameRequired(NameField),
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
    #[error("{0}")]
    Service(String),
    #[error("network error: {0}")]
    Network(String),
}

impl AccountError {
    /// Maps a message reported by the auth service to a known error.
    pub fn from_service_message(message: &str) -> Self {
        match message {
            "Invalid login credentials" => AccountError::InvalidCredentials,
            "Email not confirmed" => AccountError::EmailNotConfirmed,
            m if m.contains("already registered") => AccountError::EmailExists,
            m => AccountError::Service(m.to_string()),
        }
    }

    pub fn display(&self, language: Language) -> String {
        let text = match self {
            AccountError::NotAuthenticated => Text::AuthNotAuthenticated,
            AccountError::SessionExpired => Text::AuthSessionExpired,
            AccountError::InvalidCredentials => Text::AuthInvalidCredentials,
            AccountError::EmailNotConfirmed => Text::AuthEmailNotConfirmed,
            AccountError::EmailExists => Text::AuthEmailExists,
            AccountError::NoModel => Text::SaveModelNoModel,
            AccountError::NameRequired(NameField::Model) => Text::SaveModelNameRequired,
            AccountError::NameRequired(NameField::Profile) => Text::ProfileNameRequired,
            AccountError::PasswordMismatch => Text::AuthPasswordMismatch,
            AccountError::PasswordTooShort => Text::AuthPasswordTooShort,
            AccountError::Service(message) => return message.clone(),
            AccountError::Network(details) => {
                return format!("{}: {}", Text::ErrorNetwork.in_language(language), details);
            }
        };
        text.in_language(language).to_string()
    }
}

/// Result of checking a stored session against the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCheck {
    /// Usable as is, or could not be refreshed yet but has not run out.
    Fresh,
    Refreshed(Session),
    /// Gone or rejected; the user has to sign in again.
    SignedOut,
}

/// Outcome of a sign-up: either signed in right away, or waiting for the
/// user to confirm the address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    SignedIn(Session),
    ConfirmationSent,
}

/// Raw account operations. Implementations do not validate input.
#[async_trait(?Send)]
pub trait AccountService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AccountError>;
    async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpOutcome, AccountError>;
    async fn sign_out(&self, session: &Session) -> Result<(), AccountError>;
    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AccountError>;
    async fn resend_confirmation(&self, email: &str) -> Result<(), AccountError>;
    async fn reset_password(&self, email: &str) -> Result<(), AccountError>;
    async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>, AccountError>;
    async fn update_profile(&self, session: &Session, update: &ProfileUpdate) -> Result<(), AccountError>;
    async fn save_model(&self, session: &Session, model: &NewModel) -> Result<SavedModel, AccountError>;
    async fn list_models(&self, session: &Session) -> Result<Vec<SavedModel>, AccountError>;
    async fn delete_model(&self, session: &Session, model_id: &str) -> Result<(), AccountError>;
}

/// A service bound to the current session.
pub struct Accounts<'a, S: ?Sized> {
    service: &'a S,
    session: Option<&'a Session>,
}

impl<'a, S> Accounts<'a, S>
where
    S: AccountService + ?Sized,
{
    pub fn new(service: &'a S, session: Option<&'a Session>) -> Self {
        Self { service, session }
    }

    fn session(&self) -> Result<&'a Session, AccountError> {
        self.session.ok_or(AccountError::NotAuthenticated)
    }

    pub async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpOutcome, AccountError> {
        form.validate()?;
        self.service.sign_up(form).await
    }

    pub async fn sign_out(&self) -> Result<(), AccountError> {
        match self.session {
            Some(session) => self.service.sign_out(session).await,
            None => Ok(()),
        }
    }

    /// Refreshes the session when it is about to expire. A network failure
    /// keeps a still-valid token; any other failure signs the user out.
    pub async fn check_session(&self, now: u64) -> SessionCheck {
        let Some(session) = self.session else {
            return SessionCheck::SignedOut;
        };
        if !session.needs_refresh(now) {
            return SessionCheck::Fresh;
        }
        let Some(refresh_token) = session.refresh_token.as_deref() else {
            return if session.is_expired(now) || session.expires_at.is_none() {
                SessionCheck::SignedOut
            } else {
                SessionCheck::Fresh
            };
        };
        match self.service.refresh_session(refresh_token).await {
            Ok(refreshed) => SessionCheck::Refreshed(refreshed),
            Err(AccountError::Network(_)) if !session.is_expired(now) => SessionCheck::Fresh,
            Err(_) => SessionCheck::SignedOut,
        }
    }

    pub async fn update_profile(&self, name: &str) -> Result<ProfileUpdate, AccountError> {
        let update = ProfileUpdate::new(name)?;
        self.service.update_profile(self.session()?, &update).await?;
        Ok(update)
    }

    pub async fn save_model(&self, form: SaveModelForm) -> Result<SavedModel, AccountError> {
        // Validation runs before the session check so the dialog reports
        // form problems first.
        let user_id = self.session.map(|s| s.user.id.as_str()).unwrap_or_default();
        let model = form.into_new_model(user_id)?;
        self.service.save_model(self.session()?, &model).await
    }

    /// Newest first. Empty when signed out.
    pub async fn list_models(&self) -> Result<Vec<SavedModel>, AccountError> {
        match self.session {
            Some(session) => self.service.list_models(session).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn delete_model(&self, model_id: &str) -> Result<(), AccountError> {
        self.service.delete_model(self.session()?, model_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    #[derive(Default)]
    struct FakeService {
        calls: RefCell<Vec<String>>,
        saved: RefCell<Vec<NewModel>>,
        refresh_error: Option<AccountError>,
    }

    impl FakeService {
        fn called(&self, name: &str) {
            self.calls.borrow_mut().push(name.to_string());
        }
    }

    #[async_trait(?Send)]
    impl AccountService for FakeService {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session, AccountError> {
            self.called("sign_in");
            Err(AccountError::InvalidCredentials)
        }
        async fn sign_up(&self, _form: &SignUpForm) -> Result<SignUpOutcome, AccountError> {
            self.called("sign_up");
            Ok(SignUpOutcome::ConfirmationSent)
        }
        async fn sign_out(&self, _session: &Session) -> Result<(), AccountError> {
            self.called("sign_out");
            Ok(())
        }
        async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AccountError> {
            self.called("refresh_session");
            if let Some(err) = &self.refresh_error {
                return Err(err.clone());
            }
            Ok(Session {
                access_token: format!("new-{refresh_token}"),
                refresh_token: Some("refresh-2".into()),
                expires_at: Some(10_000),
                ..session()
            })
        }
        async fn resend_confirmation(&self, _email: &str) -> Result<(), AccountError> {
            self.called("resend");
            Ok(())
        }
        async fn reset_password(&self, _email: &str) -> Result<(), AccountError> {
            self.called("reset");
            Ok(())
        }
        async fn fetch_profile(&self, _session: &Session) -> Result<Option<Profile>, AccountError> {
            self.called("fetch_profile");
            Ok(None)
        }
        async fn update_profile(&self, _session: &Session, _update: &ProfileUpdate) -> Result<(), AccountError> {
            self.called("update_profile");
            Ok(())
        }
        async fn save_model(&self, session: &Session, model: &NewModel) -> Result<SavedModel, AccountError> {
            self.called("save_model");
            self.saved.borrow_mut().push(model.clone());
            Ok(SavedModel {
                id: "m-1".into(),
                user_id: session.user.id.clone(),
                name: model.name.clone(),
                description: Some(model.description.clone()),
                model_url: model.model_url.clone(),
                thumbnail_url: model.thumbnail_url.clone(),
                format: model.format.clone(),
                created_at: "2026-01-01T00:00:00Z".into(),
            })
        }
        async fn list_models(&self, _session: &Session) -> Result<Vec<SavedModel>, AccountError> {
            self.called("list_models");
            Ok(Vec::new())
        }
        async fn delete_model(&self, _session: &Session, _model_id: &str) -> Result<(), AccountError> {
            self.called("delete_model");
            Ok(())
        }
    }

    fn session() -> Session {
        Session {
            access_token: "token".into(),
            refresh_token: Some("refresh-1".into()),
            expires_at: Some(4_000),
            user: User {
                id: "user-1".into(),
                email: Some("a@b.c".into()),
            },
        }
    }

    fn asset(url: &str, format: &str) -> Asset {
        Asset {
            url: url.into(),
            name: "model.glb".into(),
            format: format.into(),
        }
    }

    #[test]
    fn service_messages_map_to_known_errors() {
        assert_eq!(
            AccountError::from_service_message("Invalid login credentials"),
            AccountError::InvalidCredentials
        );
        assert_eq!(
            AccountError::from_service_message("Email not confirmed"),
            AccountError::EmailNotConfirmed
        );
        assert_eq!(
            AccountError::from_service_message("User already registered"),
            AccountError::EmailExists
        );
        let other = AccountError::from_service_message("Rate limit exceeded");
        assert_eq!(other.display(Language::Ru), "Rate limit exceeded");
    }

    #[test]
    fn sign_up_form_rules() {
        let mut form = SignUpForm {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret2".into(),
        };
        assert_eq!(form.validate(), Err(AccountError::PasswordMismatch));
        form.password = "abc".into();
        form.confirm_password = "abc".into();
        assert_eq!(form.validate(), Err(AccountError::PasswordTooShort));
        form.password = "abcdef".into();
        form.confirm_password = "abcdef".into();
        assert_eq!(form.validate(), Ok(()));
        form.name = "  ".into();
        assert_eq!(form.validate(), Err(AccountError::NameRequired(NameField::Profile)));
    }

    #[test]
    fn model_format_falls_back_to_url_then_glb() {
        assert_eq!(model_format(&asset("https://x/a.glb", "USDZ")), "usdz");
        assert_eq!(model_format(&asset("https://x/a.FBX?sig=1", "")), "fbx");
        assert_eq!(model_format(&asset("https://x/download", "")), "glb");
    }

    #[test]
    fn save_validates_before_requiring_a_session() {
        let service = FakeService::default();
        let accounts = Accounts::new(&service, None);

        let missing = block_on(accounts.save_model(SaveModelForm {
            name: "Chair".into(),
            ..SaveModelForm::default()
        }));
        assert_eq!(missing, Err(AccountError::NoModel));

        let unnamed = block_on(accounts.save_model(SaveModelForm {
            name: " ".into(),
            asset: Some(asset("https://x/a.glb", "glb")),
            ..SaveModelForm::default()
        }));
        assert_eq!(unnamed, Err(AccountError::NameRequired(NameField::Model)));

        let signed_out = block_on(accounts.save_model(SaveModelForm {
            name: "Chair".into(),
            asset: Some(asset("https://x/a.glb", "glb")),
            ..SaveModelForm::default()
        }));
        assert_eq!(signed_out, Err(AccountError::NotAuthenticated));
        assert!(service.calls.borrow().is_empty());
    }

    #[test]
    fn save_trims_and_scopes_to_user() {
        let service = FakeService::default();
        let session = session();
        let accounts = Accounts::new(&service, Some(&session));

        let saved = block_on(accounts.save_model(SaveModelForm {
            name: "  Chair ".into(),
            description: " wooden ".into(),
            asset: Some(asset("https://x/a.glb", "")),
            thumbnail_url: Some(String::new()),
        }))
        .unwrap();

        assert_eq!(saved.user_id, "user-1");
        let row = service.saved.borrow()[0].clone();
        assert_eq!(row.name, "Chair");
        assert_eq!(row.description, "wooden");
        assert_eq!(row.format, "glb");
        assert_eq!(row.thumbnail_url, None);
    }

    #[test]
    fn signed_out_listing_is_empty_and_mutations_fail() {
        let service = FakeService::default();
        let accounts = Accounts::new(&service, None);

        assert_eq!(block_on(accounts.list_models()), Ok(Vec::new()));
        assert_eq!(block_on(accounts.delete_model("m-1")), Err(AccountError::NotAuthenticated));
        assert_eq!(
            block_on(accounts.update_profile("Ann")),
            Err(AccountError::NotAuthenticated)
        );
        assert_eq!(block_on(accounts.sign_out()), Ok(()));
        assert!(service.calls.borrow().is_empty());
    }

    #[test]
    fn blank_profile_name_is_rejected_before_the_call() {
        let service = FakeService::default();
        let session = session();
        let accounts = Accounts::new(&service, Some(&session));

        assert_eq!(
            block_on(accounts.update_profile("   ")),
            Err(AccountError::NameRequired(NameField::Profile))
        );
        assert_eq!(block_on(accounts.update_profile(" Ann ")).map(|u| u.name), Ok("Ann".into()));
        assert_eq!(*service.calls.borrow(), vec!["update_profile".to_string()]);
    }

    #[test]
    fn invalid_sign_up_never_reaches_the_service() {
        let service = FakeService::default();
        let accounts = Accounts::new(&service, None);
        let form = SignUpForm {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            password: "abc".into(),
            confirm_password: "abc".into(),
        };
        assert_eq!(block_on(accounts.sign_up(&form)), Err(AccountError::PasswordTooShort));
        assert!(service.calls.borrow().is_empty());
    }

    #[test]
    fn session_expiry_arithmetic() {
        let session = session();
        assert!(!session.needs_refresh(3_000));
        assert_eq!(session.refresh_in(3_000), 4_000 - REFRESH_MARGIN_SECS - 3_000);
        assert!(session.needs_refresh(4_000 - REFRESH_MARGIN_SECS));
        assert!(!session.is_expired(3_999));
        assert!(session.is_expired(4_000));

        let legacy: Session =
            serde_json::from_str(r#"{"access_token":"t","user":{"id":"u1"}}"#).unwrap();
        assert_eq!(legacy.expires_at, None);
        assert!(legacy.needs_refresh(0));
    }

    #[test]
    fn fresh_session_is_left_alone() {
        let service = FakeService::default();
        let session = session();
        let accounts = Accounts::new(&service, Some(&session));

        assert_eq!(block_on(accounts.check_session(1_000)), SessionCheck::Fresh);
        assert!(service.calls.borrow().is_empty());
    }

    #[test]
    fn expired_session_is_refreshed() {
        let service = FakeService::default();
        let session = session();
        let accounts = Accounts::new(&service, Some(&session));

        let SessionCheck::Refreshed(refreshed) = block_on(accounts.check_session(5_000)) else {
            panic!("expected a refreshed session");
        };
        assert_eq!(refreshed.access_token, "new-refresh-1");
        assert_eq!(refreshed.expires_at, Some(10_000));
        assert_eq!(*service.calls.borrow(), vec!["refresh_session".to_string()]);
    }

    #[test]
    fn rejected_refresh_signs_out() {
        let service = FakeService {
            refresh_error: Some(AccountError::Service("Invalid Refresh Token".into())),
            ..FakeService::default()
        };
        let session = session();
        let accounts = Accounts::new(&service, Some(&session));

        assert_eq!(block_on(accounts.check_session(3_990)), SessionCheck::SignedOut);
    }

    #[test]
    fn offline_refresh_keeps_a_valid_token_only() {
        let service = FakeService {
            refresh_error: Some(AccountError::Network("offline".into())),
            ..FakeService::default()
        };
        let session = session();
        let accounts = Accounts::new(&service, Some(&session));

        assert_eq!(block_on(accounts.check_session(3_990)), SessionCheck::Fresh);
        assert_eq!(block_on(accounts.check_session(4_500)), SessionCheck::SignedOut);
    }

    #[test]
    fn expired_session_without_refresh_token_signs_out() {
        let service = FakeService::default();
        let session = Session {
            refresh_token: None,
            ..session()
        };
        let accounts = Accounts::new(&service, Some(&session));

        assert_eq!(block_on(accounts.check_session(4_000)), SessionCheck::SignedOut);
        assert_eq!(block_on(Accounts::new(&service, None).check_session(0)), SessionCheck::SignedOut);
        assert!(service.calls.borrow().is_empty());
    }
}
