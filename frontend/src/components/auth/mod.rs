//! Sign-in/sign-up dialog, profile dialog and the header user menu.

mod auth_dialog;
mod profile_dialog;
mod user_menu;

pub use auth_dialog::AuthDialog;
pub use profile_dialog::ProfileDialog;
pub use user_menu::UserMenu;

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Result line shown under a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Error(String),
    Success(String),
}

impl Feedback {
    pub fn view(feedback: Option<&Feedback>) -> Html {
        match feedback {
            Some(Feedback::Error(message)) => html! { <p class="form-error">{ message }</p> },
            Some(Feedback::Success(message)) => html! { <p class="form-success">{ message }</p> },
            None => html! {},
        }
    }
}

/// Message of a failed call, or `fallback` when the service gave none.
pub fn error_text(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

pub fn input_value(event: InputEvent) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// A labelled `<input>` that reports every edit.
pub fn text_field(
    label: &str,
    kind: &'static str,
    value: &str,
    placeholder: Option<&str>,
    disabled: bool,
    on_input: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |event: InputEvent| {
        if let Some(value) = input_value(event) {
            on_input.emit(value);
        }
    });
    html! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <input
                type={kind}
                value={value.to_string()}
                placeholder={placeholder.map(str::to_string)}
                {disabled}
                {oninput}
            />
        </label>
    }
}
