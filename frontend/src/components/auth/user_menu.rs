use common::account::Accounts;
use common::i18n::Text;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::contexts::{AuthContext, AuthEvent, LanguageContext};

#[derive(Properties, PartialEq)]
pub struct UserMenuProps {
    pub on_sign_in: Callback<()>,
    pub on_profile: Callback<()>,
    pub on_my_models: Callback<()>,
    /// Flat list for the mobile menu instead of a dropdown.
    #[prop_or_default]
    pub compact: bool,
}

/// Sign-in button when signed out, account dropdown when signed in.
/// Renders nothing when the bundle has no account backend.
#[function_component(UserMenu)]
pub fn user_menu(props: &UserMenuProps) -> Html {
    let open = use_state(|| false);
    let (Some(language), Some(auth)) = (use_context::<LanguageContext>(), use_context::<AuthContext>()) else {
        return html! {};
    };
    if auth.service.is_none() {
        return html! {};
    }

    let emit = |callback: &Callback<()>| {
        let callback = callback.clone();
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            callback.emit(());
        })
    };

    if !auth.is_signed_in() {
        return html! {
            <button class="pill-button" onclick={emit(&props.on_sign_in)}>
                { language.t(Text::AuthSignIn) }
            </button>
        };
    }

    let on_sign_out = {
        let auth = auth.clone();
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            let service = auth.service.clone();
            let session = auth.session.clone();
            let on_change = auth.on_change.clone();
            spawn_local(async move {
                if let Some(service) = service {
                    if let Err(err) = Accounts::new(&*service, session.as_ref()).sign_out().await {
                        error!(format!("sign out failed: {err}"));
                    }
                }
                on_change.emit(AuthEvent::SignedOut);
            });
        })
    };

    let items = html! {
        <>
            <button class="menu-item" onclick={emit(&props.on_profile)}>
                { language.t(Text::UserProfile) }
            </button>
            <button class="menu-item" onclick={emit(&props.on_my_models)}>
                { language.t(Text::UserMyModels) }
            </button>
            <button class="menu-item danger" onclick={on_sign_out}>
                { language.t(Text::AuthSignOut) }
            </button>
        </>
    };
    let identity = html! {
        <div class="identity">
            <span class="avatar">{ auth.initials() }</span>
            <div class="identity-text">
                <p class="identity-name">{ auth.display_name().unwrap_or_default() }</p>
                <p class="identity-email">{ auth.email().unwrap_or_default().to_string() }</p>
            </div>
        </div>
    };

    if props.compact {
        return html! {
            <div class="user-menu compact">
                { identity }
                { items }
            </div>
        };
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="user-menu">
            <button class="pill-button" onclick={toggle} aria-label={language.t(Text::UserAccount)}>
                <span class="avatar">{ auth.initials() }</span>
                <span class="identity-name">{ auth.display_name().unwrap_or_default() }</span>
            </button>
            if *open {
                <div class="dropdown">
                    { identity }
                    { items }
                </div>
            }
        </div>
    }
}
