use common::account::{AccountError, AccountService, Accounts, SignUpForm, SignUpOutcome};
use common::i18n::Text;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{error_text, text_field, Feedback};
use crate::contexts::{AuthContext, AuthEvent, LanguageContext};
use crate::tops_sheet::YwMaterialTopSheet;

/// Delay before a confirmed sign-up returns to the sign-in view.
const SIGN_UP_RETURN_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    SignIn,
    SignUp,
    ForgotPassword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Fields {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

#[derive(Properties, PartialEq)]
pub struct AuthDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(AuthDialog)]
pub fn auth_dialog(props: &AuthDialogProps) -> Html {
    let (Some(language), Some(auth)) = (use_context::<LanguageContext>(), use_context::<AuthContext>()) else {
        return html! {};
    };
    let lang = language.language;

    let view = use_state(|| View::SignIn);
    let fields = use_state(Fields::default);
    let busy = use_state(|| false);
    let feedback = use_state(|| None::<Feedback>);
    let unconfirmed = use_state(|| None::<String>);

    let switch_to = |target: View| {
        let view = view.clone();
        let feedback = feedback.clone();
        let unconfirmed = unconfirmed.clone();
        Callback::from(move |_: MouseEvent| {
            feedback.set(None);
            unconfirmed.set(None);
            view.set(target);
        })
    };
    let edit = |apply: fn(&mut Fields, String)| {
        let fields = fields.clone();
        Callback::from(move |value: String| {
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        })
    };

    let on_submit = {
        let view = view.clone();
        let fields = fields.clone();
        let busy = busy.clone();
        let feedback = feedback.clone();
        let unconfirmed = unconfirmed.clone();
        let auth = auth.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(service) = auth.service.clone() else {
                return;
            };
            busy.set(true);
            feedback.set(None);

            let current = *view;
            let values = (*fields).clone();
            let view = view.clone();
            let busy = busy.clone();
            let feedback = feedback.clone();
            let unconfirmed = unconfirmed.clone();
            let on_change = auth.on_change.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                match current {
                    View::SignIn => match service.sign_in(values.email.trim(), &values.password).await {
                        Ok(session) => {
                            on_change.emit(AuthEvent::SignedIn(session));
                            on_close.emit(());
                        }
                        Err(err) => {
                            if err == AccountError::EmailNotConfirmed {
                                unconfirmed.set(Some(values.email.trim().to_string()));
                            }
                            let message = error_text(err.display(lang), lang.t(Text::AuthSignInError));
                            feedback.set(Some(Feedback::Error(message)));
                        }
                    },
                    View::SignUp => {
                        let form = SignUpForm {
                            name: values.name,
                            email: values.email,
                            password: values.password,
                            confirm_password: values.confirm_password,
                        };
                        match Accounts::new(&*service, None).sign_up(&form).await {
                            Ok(SignUpOutcome::SignedIn(session)) => {
                                on_change.emit(AuthEvent::SignedIn(session));
                                on_close.emit(());
                            }
                            Ok(SignUpOutcome::ConfirmationSent) => {
                                let message = lang.t(Text::AuthSignUpSuccessConfirmEmail).to_string();
                                feedback.set(Some(Feedback::Success(message)));
                                busy.set(false);
                                TimeoutFuture::new(SIGN_UP_RETURN_MS).await;
                                feedback.set(None);
                                view.set(View::SignIn);
                            }
                            Err(err) => {
                                let message = error_text(err.display(lang), lang.t(Text::AuthSignUpError));
                                feedback.set(Some(Feedback::Error(message)));
                            }
                        }
                    }
                    View::ForgotPassword => match service.reset_password(values.email.trim()).await {
                        Ok(()) => {
                            let message = lang.t(Text::AuthResetLinkSent).to_string();
                            feedback.set(Some(Feedback::Success(message)));
                        }
                        Err(err) => {
                            let message = error_text(err.display(lang), lang.t(Text::AuthResetError));
                            feedback.set(Some(Feedback::Error(message)));
                        }
                    },
                }
                busy.set(false);
            });
        })
    };

    let on_resend = {
        let unconfirmed = unconfirmed.clone();
        let feedback = feedback.clone();
        let busy = busy.clone();
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(service), Some(email)) = (auth.service.clone(), (*unconfirmed).clone()) else {
                return;
            };
            busy.set(true);
            let feedback = feedback.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let next = match service.resend_confirmation(&email).await {
                    Ok(()) => Feedback::Success(lang.t(Text::AuthConfirmationEmailResent).to_string()),
                    Err(err) => Feedback::Error(error_text(err.display(lang), lang.t(Text::AuthResendError))),
                };
                feedback.set(Some(next));
                busy.set(false);
            });
        })
    };

    let disabled = *busy;
    let title = match *view {
        View::SignIn => Text::AuthSignIn,
        View::SignUp => Text::AuthSignUp,
        View::ForgotPassword => Text::AuthResetPassword,
    };
    let submit_label = match (*view, disabled) {
        (View::SignIn, false) => Text::AuthSignIn,
        (View::SignIn, true) => Text::AuthSigningIn,
        (View::SignUp, false) => Text::AuthSignUp,
        (View::SignUp, true) => Text::AuthSigningUp,
        (View::ForgotPassword, false) => Text::AuthSendResetLink,
        (View::ForgotPassword, true) => Text::AuthSending,
    };

    let email_field = text_field(
        language.t(Text::AuthEmail),
        "email",
        &fields.email,
        Some("email@example.com"),
        disabled,
        edit(|f, v| f.email = v),
    );
    let password_field = text_field(
        language.t(Text::AuthPassword),
        "password",
        &fields.password,
        None,
        disabled,
        edit(|f, v| f.password = v),
    );

    let body = match *view {
        View::SignIn => html! {
            <>
                { email_field }
                { password_field }
                <button type="button" class="link-button" onclick={switch_to(View::ForgotPassword)}>
                    { language.t(Text::AuthForgotPassword) }
                </button>
            </>
        },
        View::SignUp => html! {
            <>
                { text_field(
                    language.t(Text::AuthName),
                    "text",
                    &fields.name,
                    Some(language.t(Text::AuthNamePlaceholder)),
                    disabled,
                    edit(|f, v| f.name = v),
                ) }
                { email_field }
                { password_field }
                { text_field(
                    language.t(Text::AuthConfirmPassword),
                    "password",
                    &fields.confirm_password,
                    None,
                    disabled,
                    edit(|f, v| f.confirm_password = v),
                ) }
            </>
        },
        View::ForgotPassword => html! {
            <>
                <p class="field-hint">{ language.t(Text::AuthResetInstructions) }</p>
                { email_field }
            </>
        },
    };

    let tabs = if *view == View::ForgotPassword {
        html! {
            <button type="button" class="link-button" onclick={switch_to(View::SignIn)}>
                { language.t(Text::AuthBack) }
            </button>
        }
    } else {
        html! {
            <div class="tabs">
                <button class={classes!("tab", (*view == View::SignIn).then_some("active"))} onclick={switch_to(View::SignIn)}>
                    { language.t(Text::AuthSignIn) }
                </button>
                <button class={classes!("tab", (*view == View::SignUp).then_some("active"))} onclick={switch_to(View::SignUp)}>
                    { language.t(Text::AuthSignUp) }
                </button>
            </div>
        }
    };

    html! {
        <YwMaterialTopSheet open={props.open} on_close={props.on_close.clone()} title={language.t(title).to_string()}>
            { tabs }
            <form class="auth-form" onsubmit={on_submit}>
                { body }
                { Feedback::view(feedback.as_ref()) }
                if unconfirmed.is_some() && *view == View::SignIn {
                    <button type="button" class="link-button" onclick={on_resend} {disabled}>
                        { language.t(Text::AuthResendConfirmationEmail) }
                    </button>
                }
                <button type="submit" class="primary-button wide" {disabled}>
                    { language.t(submit_label) }
                </button>
            </form>
        </YwMaterialTopSheet>
    }
}
