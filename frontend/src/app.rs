//! Application root: owns the language, theme and account session, persists
//! them, mirrors them onto `<html>` and provides them as contexts.
//!
//! A stored session is checked on startup and refreshed shortly before its
//! access token expires.

use std::rc::Rc;

use common::account::{AccountService, Accounts, Profile, Session, SessionCheck};
use common::i18n::{Language, Text};
use common::theme::Theme;
use gloo_console::{error, log, warn};
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::{html, Callback, Component, Context, ContextProvider, Html};

use crate::components::generator::GeneratorComponent;
use crate::components::toast::show_toast;
use crate::config;
use crate::contexts::{AuthContext, AuthEvent, LanguageContext, ThemeContext};
use crate::services::storage;
use crate::services::supabase::SupabaseService;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
/// Lower bound between refresh attempts, so a failing refresh does not spin.
const MIN_REFRESH_DELAY_SECS: u64 = 30;

pub struct App {
    language: Language,
    theme: Theme,
    session: Option<Session>,
    profile: Option<Profile>,
    service: Option<Rc<SupabaseService>>,
    refresh_timer: Option<Timeout>,
}

pub enum Msg {
    SetLanguage(Language),
    ToggleTheme,
    Auth(AuthEvent),
    ProfileLoaded(Option<Profile>),
    RefreshSession,
    SessionChecked(SessionCheck),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let language = storage::load_language().unwrap_or_default();
        let theme = Theme::resolve(storage::load_theme().as_deref(), prefers_dark());
        let service = config::supabase().map(|config| Rc::new(SupabaseService::new(config)));
        let session = service.as_ref().and_then(|_| storage::load_session());

        apply_language(language);
        apply_theme(theme);

        let app = Self {
            language,
            theme,
            session,
            profile: None,
            service,
            refresh_timer: None,
        };
        app.check_session(ctx);
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetLanguage(language) => {
                if language == self.language {
                    return false;
                }
                self.language = language;
                storage::save_language(language);
                apply_language(language);
                true
            }
            Msg::ToggleTheme => {
                self.theme = self.theme.toggled();
                storage::save_theme(self.theme);
                apply_theme(self.theme);
                true
            }
            Msg::Auth(AuthEvent::SignedIn(session)) => {
                log!(format!("signed in as {}", session.user.id));
                storage::save_session(&session);
                self.session = Some(session);
                self.profile = None;
                self.load_profile(ctx);
                self.schedule_refresh(ctx);
                true
            }
            Msg::Auth(AuthEvent::SignedOut) => {
                storage::clear_session();
                self.session = None;
                self.profile = None;
                self.refresh_timer = None;
                true
            }
            Msg::Auth(AuthEvent::ProfileChanged(profile)) | Msg::ProfileLoaded(Some(profile)) => {
                self.profile = Some(profile);
                true
            }
            Msg::ProfileLoaded(None) => false,
            Msg::RefreshSession => {
                self.refresh_timer = None;
                self.check_session(ctx);
                false
            }
            Msg::SessionChecked(SessionCheck::Fresh) => {
                if self.profile.is_none() {
                    self.load_profile(ctx);
                }
                self.schedule_refresh(ctx);
                false
            }
            Msg::SessionChecked(SessionCheck::Refreshed(session)) => {
                // Signed out while the refresh was in flight.
                if self.session.is_none() {
                    return false;
                }
                storage::save_session(&session);
                self.session = Some(session);
                if self.profile.is_none() {
                    self.load_profile(ctx);
                }
                self.schedule_refresh(ctx);
                true
            }
            Msg::SessionChecked(SessionCheck::SignedOut) => {
                if self.session.is_none() {
                    return false;
                }
                warn!("stored session is no longer valid");
                show_toast(self.language.t(Text::AuthSessionExpired));
                ctx.link().send_message(Msg::Auth(AuthEvent::SignedOut));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let language = LanguageContext {
            language: self.language,
            set_language: link.callback(Msg::SetLanguage),
        };
        let theme = ThemeContext {
            theme: self.theme,
            toggle: link.callback(|_| Msg::ToggleTheme),
        };
        let auth = AuthContext {
            session: self.session.clone(),
            profile: self.profile.clone(),
            service: self.service.clone(),
            on_change: link.callback(Msg::Auth),
        };

        html! {
            <ContextProvider<LanguageContext> context={language}>
                <ContextProvider<ThemeContext> context={theme}>
                    <ContextProvider<AuthContext> context={auth}>
                        <GeneratorComponent
                            language={self.language}
                            theme={self.theme}
                            signed_in={self.session.is_some()}
                        />
                    </ContextProvider<AuthContext>>
                </ContextProvider<ThemeContext>>
            </ContextProvider<LanguageContext>>
        }
    }
}

impl App {
    fn load_profile(&self, ctx: &Context<Self>) {
        let (Some(service), Some(session)) = (self.service.clone(), self.session.clone()) else {
            return;
        };
        let on_loaded: Callback<Option<Profile>> = ctx.link().callback(Msg::ProfileLoaded);
        let on_auth: Callback<AuthEvent> = ctx.link().callback(Msg::Auth);
        spawn_local(async move {
            match service.fetch_profile(&session).await {
                Ok(profile) => on_loaded.emit(profile),
                Err(err) => {
                    error!(format!("could not load profile: {err}"));
                    if let Some(event) = AuthEvent::after_error(&err) {
                        on_auth.emit(event);
                    }
                }
            }
        });
    }

    /// Refreshes the session if it is close to expiry; reports the outcome.
    fn check_session(&self, ctx: &Context<Self>) {
        let (Some(service), Some(session)) = (self.service.clone(), self.session.clone()) else {
            return;
        };
        let on_checked = ctx.link().callback(Msg::SessionChecked);
        spawn_local(async move {
            let check = Accounts::new(&*service, Some(&session))
                .check_session(now_secs())
                .await;
            on_checked.emit(check);
        });
    }

    fn schedule_refresh(&mut self, ctx: &Context<Self>) {
        let Some(session) = &self.session else {
            self.refresh_timer = None;
            return;
        };
        let delay_secs = session.refresh_in(now_secs()).max(MIN_REFRESH_DELAY_SECS);
        let delay_ms = u32::try_from(delay_secs.saturating_mul(1000))
            .unwrap_or(u32::MAX)
            .min(i32::MAX as u32);
        let link = ctx.link().clone();
        self.refresh_timer = Some(Timeout::new(delay_ms, move || {
            link.send_message(Msg::RefreshSession)
        }));
    }
}

fn now_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

fn apply_language(language: Language) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        root.set_attribute("lang", language.code()).ok();
    }
}

/// Sets the theme class on `<html>`, replacing the other one.
fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        classes.remove_1(theme.toggled().as_str()).ok();
        classes.add_1(theme.as_str()).ok();
    }
}
