//! [`AccountService`] over the Supabase REST API.

use async_trait::async_trait;
use gloo_console::{error, log};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use common::account::endpoints::{
    error_from_body, AuthReply, Credentials, EmailBody, RefreshBody, ResendBody, SignUpBody,
    SignUpMetadata, SupabaseEndpoints, API_KEY_HEADER, PREFER_RETURN,
};
use common::account::{
    AccountError, AccountService, NewModel, Profile, ProfileUpdate, SavedModel, Session,
    SignUpForm, SignUpOutcome,
};

use crate::config::SupabaseConfig;

/// Path the password reset mail links back to.
const RESET_PASSWORD_PATH: &str = "/reset-password";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseService {
    endpoints: SupabaseEndpoints,
    anon_key: String,
}

impl SupabaseService {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            endpoints: SupabaseEndpoints::new(config.url),
            anon_key: config.anon_key.to_string(),
        }
    }

    /// Adds the project key and the bearer token: the user's when signed in,
    /// the anon key otherwise.
    fn authorize(&self, builder: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
        let token = session.map_or(self.anon_key.as_str(), |s| s.access_token.as_str());
        builder
            .header(API_KEY_HEADER, &self.anon_key)
            .header("Authorization", &format!("Bearer {token}"))
    }
}

async fn exchange(request: Result<Request, gloo_net::Error>) -> Result<String, AccountError> {
    let response = request.map_err(network)?.send().await.map_err(network)?;
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    if response.ok() {
        Ok(body)
    } else {
        let err = error_from_body(status, &body);
        error!(format!("account request failed with {status}: {err}"));
        Err(err)
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, AccountError> {
    serde_json::from_str(body).map_err(|err| AccountError::Service(err.to_string()))
}

fn network(err: gloo_net::Error) -> AccountError {
    AccountError::Network(err.to_string())
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[async_trait(?Send)]
impl AccountService for SupabaseService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AccountError> {
        let request = self
            .authorize(Request::post(&self.endpoints.sign_in()), None)
            .json(&Credentials { email, password });
        let reply: AuthReply = parse(&exchange(request).await?)?;
        reply
            .into_session()
            .ok_or_else(|| AccountError::Service("sign-in reply carried no session".to_string()))
    }

    async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpOutcome, AccountError> {
        let body = SignUpBody {
            email: form.email.trim(),
            password: &form.password,
            data: SignUpMetadata { name: form.name.trim() },
        };
        let request = self
            .authorize(Request::post(&self.endpoints.sign_up()), None)
            .json(&body);
        let reply: AuthReply = parse(&exchange(request).await?)?;
        Ok(match reply.into_session() {
            Some(session) => SignUpOutcome::SignedIn(session),
            None => SignUpOutcome::ConfirmationSent,
        })
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AccountError> {
        let request = self
            .authorize(Request::post(&self.endpoints.sign_out()), Some(session))
            .build();
        exchange(request).await.map(drop)
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AccountError> {
        let request = self
            .authorize(Request::post(&self.endpoints.refresh()), None)
            .json(&RefreshBody { refresh_token });
        let reply: AuthReply = parse(&exchange(request).await?)?;
        let session = reply
            .into_session()
            .ok_or_else(|| AccountError::Service("refresh reply carried no session".to_string()))?;
        log!(format!("refreshed session of {}", session.user.id));
        Ok(session)
    }

    async fn resend_confirmation(&self, email: &str) -> Result<(), AccountError> {
        let request = self
            .authorize(Request::post(&self.endpoints.resend()), None)
            .json(&ResendBody::signup(email));
        exchange(request).await.map(drop)
    }

    async fn reset_password(&self, email: &str) -> Result<(), AccountError> {
        let redirect = format!("{}{}", page_origin(), RESET_PASSWORD_PATH);
        let request = self
            .authorize(Request::post(&self.endpoints.recover(&redirect)), None)
            .json(&EmailBody { email });
        exchange(request).await.map(drop)
    }

    async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>, AccountError> {
        let request = self
            .authorize(
                Request::get(&self.endpoints.profile_select(&session.user.id)),
                Some(session),
            )
            .build();
        let rows: Vec<Profile> = parse(&exchange(request).await?)?;
        Ok(rows.into_iter().next())
    }

    async fn update_profile(&self, session: &Session, update: &ProfileUpdate) -> Result<(), AccountError> {
        let request = self
            .authorize(
                Request::patch(&self.endpoints.profile(&session.user.id)),
                Some(session),
            )
            .json(update);
        exchange(request).await.map(drop)
    }

    async fn save_model(&self, session: &Session, model: &NewModel) -> Result<SavedModel, AccountError> {
        let (prefer, representation) = PREFER_RETURN;
        let request = self
            .authorize(Request::post(&self.endpoints.models()), Some(session))
            .header(prefer, representation)
            .json(model);
        let rows: Vec<SavedModel> = parse(&exchange(request).await?)?;
        let saved = rows
            .into_iter()
            .next()
            .ok_or_else(|| AccountError::Service("insert returned no row".to_string()))?;
        log!(format!("saved model {}", saved.id));
        Ok(saved)
    }

    async fn list_models(&self, session: &Session) -> Result<Vec<SavedModel>, AccountError> {
        let request = self
            .authorize(
                Request::get(&self.endpoints.models_of(&session.user.id)),
                Some(session),
            )
            .build();
        parse(&exchange(request).await?)
    }

    async fn delete_model(&self, session: &Session, model_id: &str) -> Result<(), AccountError> {
        let request = self
            .authorize(
                Request::delete(&self.endpoints.model(model_id, &session.user.id)),
                Some(session),
            )
            .build();
        exchange(request).await.map(drop)
    }
}
