use common::account::{Accounts, Profile};
use common::i18n::Text;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{error_text, text_field, Feedback};
use crate::contexts::{AuthContext, AuthEvent, LanguageContext};
use crate::tops_sheet::YwMaterialTopSheet;

const SUCCESS_VISIBLE_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct ProfileDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Edits the display name. The email comes from the auth account and is
/// read-only here.
#[function_component(ProfileDialog)]
pub fn profile_dialog(props: &ProfileDialogProps) -> Html {
    let (Some(language), Some(auth)) = (use_context::<LanguageContext>(), use_context::<AuthContext>()) else {
        return html! {};
    };
    let lang = language.language;

    let current_name = auth.profile.as_ref().map(|p| p.name.clone()).unwrap_or_default();
    let name = use_state(|| current_name.clone());
    let busy = use_state(|| false);
    let feedback = use_state(|| None::<Feedback>);

    {
        let name = name.clone();
        let feedback = feedback.clone();
        use_effect_with((current_name, props.open), move |(current, _)| {
            name.set(current.clone());
            feedback.set(None);
        });
    }

    let on_input = {
        let name = name.clone();
        Callback::from(move |value: String| name.set(value))
    };

    let on_save = {
        let name = name.clone();
        let busy = busy.clone();
        let feedback = feedback.clone();
        let auth = auth.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(service) = auth.service.clone() else {
                return;
            };
            busy.set(true);
            feedback.set(None);

            let requested = (*name).clone();
            let session = auth.session.clone();
            let profile = auth.profile.clone();
            let busy = busy.clone();
            let feedback = feedback.clone();
            let on_change = auth.on_change.clone();
            let on_error = auth.on_error();
            spawn_local(async move {
                let result = Accounts::new(&*service, session.as_ref())
                    .update_profile(&requested)
                    .await;
                busy.set(false);
                match result {
                    Ok(update) => {
                        if let Some(session) = &session {
                            let mut updated = profile.unwrap_or_else(|| Profile {
                                id: session.user.id.clone(),
                                name: String::new(),
                                email: session.user.email.clone().unwrap_or_default(),
                                avatar_url: None,
                            });
                            updated.name = update.name;
                            on_change.emit(AuthEvent::ProfileChanged(updated));
                        }
                        let message = lang.t(Text::ProfileUpdateSuccess).to_string();
                        feedback.set(Some(Feedback::Success(message)));
                        TimeoutFuture::new(SUCCESS_VISIBLE_MS).await;
                        feedback.set(None);
                    }
                    Err(err) => {
                        let message = error_text(err.display(lang), lang.t(Text::ProfileUpdateError));
                        feedback.set(Some(Feedback::Error(message)));
                        on_error.emit(err);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let disabled = *busy;
    let email = auth.email().unwrap_or_default().to_string();

    html! {
        <YwMaterialTopSheet
            open={props.open}
            on_close={props.on_close.clone()}
            title={language.t(Text::ProfileTitle).to_string()}
        >
            <form class="auth-form" onsubmit={on_save}>
                <div class="avatar large">{ auth.initials() }</div>
                { text_field(
                    language.t(Text::ProfileName),
                    "text",
                    &name,
                    Some(language.t(Text::ProfileNamePlaceholder)),
                    disabled,
                    on_input,
                ) }
                <label class="field">
                    <span class="field-label">{ language.t(Text::ProfileEmail) }</span>
                    <input type="email" value={email} disabled=true />
                    <span class="field-hint">{ language.t(Text::ProfileEmailReadOnly) }</span>
                </label>
                { Feedback::view(feedback.as_ref()) }
                <div class="dialog-actions">
                    <button type="button" class="secondary-button" onclick={on_cancel}>
                        { language.t(Text::ProfileCancel) }
                    </button>
                    <button type="submit" class="primary-button" {disabled}>
                        { language.t(if disabled { Text::ProfileSaving } else { Text::ProfileSave }) }
                    </button>
                </div>
            </form>
        </YwMaterialTopSheet>
    }
}
