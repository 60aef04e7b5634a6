//! Supabase REST surface: GoTrue auth routes and PostgREST table routes.
//!
//! Only URL construction, request bodies and reply decoding live here; the
//! browser crate does the actual fetches.

use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;

use super::{AccountError, Session, User};

/// Header carrying the project's anon key on every request.
pub const API_KEY_HEADER: &str = "apikey";
/// Asks PostgREST to return the inserted row.
pub const PREFER_RETURN: (&str, &str) = ("Prefer", "return=representation");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseEndpoints {
    base: String,
}

impl SupabaseEndpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn sign_in(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base)
    }

    pub fn refresh(&self) -> String {
        format!("{}/auth/v1/token?grant_type=refresh_token", self.base)
    }

    pub fn sign_up(&self) -> String {
        format!("{}/auth/v1/signup", self.base)
    }

    pub fn sign_out(&self) -> String {
        format!("{}/auth/v1/logout", self.base)
    }

    pub fn resend(&self) -> String {
        format!("{}/auth/v1/resend", self.base)
    }

    /// Password recovery; the mail links back to `redirect_to`.
    pub fn recover(&self, redirect_to: &str) -> String {
        format!("{}/auth/v1/recover?redirect_to={}", self.base, encode(redirect_to))
    }

    pub fn profile(&self, user_id: &str) -> String {
        format!("{}/rest/v1/profiles?id=eq.{}", self.base, encode(user_id))
    }

    pub fn profile_select(&self, user_id: &str) -> String {
        format!("{}&select=*", self.profile(user_id))
    }

    pub fn models(&self) -> String {
        format!("{}/rest/v1/models", self.base)
    }

    /// The user's models, newest first.
    pub fn models_of(&self, user_id: &str) -> String {
        format!(
            "{}?user_id=eq.{}&select=*&order=created_at.desc",
            self.models(),
            encode(user_id)
        )
    }

    /// A single model, scoped to its owner.
    pub fn model(&self, model_id: &str, user_id: &str) -> String {
        format!(
            "{}?id=eq.{}&user_id=eq.{}",
            self.models(),
            encode(model_id),
            encode(user_id)
        )
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SignUpBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignUpMetadata<'a>,
}

#[derive(Debug, Serialize)]
pub struct SignUpMetadata<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RefreshBody<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct EmailBody<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResendBody<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub email: &'a str,
}

impl<'a> ResendBody<'a> {
    pub fn signup(email: &'a str) -> Self {
        Self { kind: "signup", email }
    }
}

/// Reply of the token and signup routes. The signup route answers with a
/// bare user while the address is unconfirmed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<u64>,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthReply {
    pub fn into_session(self) -> Option<Session> {
        match (self.access_token, self.user) {
            (Some(access_token), Some(user)) => Some(Session {
                access_token,
                refresh_token: self.refresh_token,
                expires_at: self.expires_at,
                user,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Turns an error reply into an [`AccountError`]. GoTrue and PostgREST use
/// different keys for the human-readable message. A 401 means the access
/// token was rejected.
pub fn error_from_body(status: u16, body: &str) -> AccountError {
    if status == 401 {
        return AccountError::SessionExpired;
    }
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .msg
        .or(parsed.error_description)
        .or(parsed.message)
        .or(parsed.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"));
    AccountError::from_service_message(&message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_auth_routes() {
        let api = SupabaseEndpoints::new("https://demo.supabase.co/");
        assert_eq!(api.sign_in(), "https://demo.supabase.co/auth/v1/token?grant_type=password");
        assert_eq!(api.sign_up(), "https://demo.supabase.co/auth/v1/signup");
        assert_eq!(api.sign_out(), "https://demo.supabase.co/auth/v1/logout");
        assert_eq!(
            api.refresh(),
            "https://demo.supabase.co/auth/v1/token?grant_type=refresh_token"
        );
        assert_eq!(
            api.recover("http://localhost:8080/reset-password"),
            "https://demo.supabase.co/auth/v1/recover?redirect_to=http%3A%2F%2Flocalhost%3A8080%2Freset-password"
        );
    }

    #[test]
    fn builds_table_routes() {
        let api = SupabaseEndpoints::new("https://demo.supabase.co");
        assert_eq!(
            api.profile_select("u1"),
            "https://demo.supabase.co/rest/v1/profiles?id=eq.u1&select=*"
        );
        assert_eq!(
            api.models_of("u1"),
            "https://demo.supabase.co/rest/v1/models?user_id=eq.u1&select=*&order=created_at.desc"
        );
        assert_eq!(
            api.model("m 1", "u1"),
            "https://demo.supabase.co/rest/v1/models?id=eq.m+1&user_id=eq.u1"
        );
    }

    #[test]
    fn unconfirmed_sign_up_has_no_session() {
        let reply: AuthReply = serde_json::from_str(r#"{"id":"u1","email":"a@b.c"}"#).unwrap();
        assert!(reply.into_session().is_none());

        let reply: AuthReply = serde_json::from_str(
            r#"{"access_token":"t","refresh_token":"r","expires_in":3600,"expires_at":1760000000,"user":{"id":"u1","email":"a@b.c"}}"#,
        )
        .unwrap();
        let session = reply.into_session().unwrap();
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.refresh_token.as_deref(), Some("r"));
        assert_eq!(session.expires_at, Some(1_760_000_000));
    }

    #[test]
    fn error_bodies_are_mapped() {
        assert_eq!(
            error_from_body(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            AccountError::InvalidCredentials
        );
        assert_eq!(
            error_from_body(422, r#"{"code":422,"msg":"User already registered"}"#),
            AccountError::EmailExists
        );
        assert_eq!(
            error_from_body(401, r#"{"code":"PGRST301","message":"JWT expired"}"#),
            AccountError::SessionExpired
        );
        assert_eq!(
            error_from_body(503, "<html>"),
            AccountError::Service("request failed with status 503".into())
        );
    }

    #[test]
    fn resend_body_names_the_flow() {
        let body = serde_json::to_string(&ResendBody::signup("a@b.c")).unwrap();
        assert_eq!(body, r#"{"type":"signup","email":"a@b.c"}"#);
    }
}
