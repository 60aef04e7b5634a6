use common::account::{Accounts, SaveModelForm, SavedModel};
use common::i18n::Text;
use common::model::asset::Asset;
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::auth::{error_text, text_field, Feedback};
use crate::contexts::{AuthContext, LanguageContext};
use crate::tops_sheet::YwMaterialTopSheet;

/// The dialog closes itself this long after a successful save.
const CLOSE_AFTER_SAVE_MS: u32 = 2000;

#[derive(Properties, PartialEq)]
pub struct SaveModelDialogProps {
    pub open: bool,
    pub asset: Option<Asset>,
    /// PNG data URL captured from the viewer, if any.
    #[prop_or_default]
    pub thumbnail: Option<String>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_saved: Callback<SavedModel>,
}

#[function_component(SaveModelDialog)]
pub fn save_model_dialog(props: &SaveModelDialogProps) -> Html {
    let (Some(language), Some(auth)) = (use_context::<LanguageContext>(), use_context::<AuthContext>()) else {
        return html! {};
    };
    let lang = language.language;

    let name = use_state(String::new);
    let description = use_state(String::new);
    let busy = use_state(|| false);
    let feedback = use_state(|| None::<Feedback>);

    {
        let name = name.clone();
        let description = description.clone();
        let feedback = feedback.clone();
        use_effect_with(props.open, move |open| {
            if *open {
                name.set(String::new());
                description.set(String::new());
                feedback.set(None);
            }
        });
    }

    let on_name = {
        let name = name.clone();
        Callback::from(move |value: String| name.set(value))
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlTextAreaElement>().ok())
            {
                description.set(area.value());
            }
        })
    };

    let on_save = {
        let name = name.clone();
        let description = description.clone();
        let busy = busy.clone();
        let feedback = feedback.clone();
        let auth = auth.clone();
        let asset = props.asset.clone();
        let thumbnail = props.thumbnail.clone();
        let on_close = props.on_close.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(service) = auth.service.clone() else {
                return;
            };
            let form = SaveModelForm {
                name: (*name).clone(),
                description: (*description).clone(),
                asset: asset.clone(),
                thumbnail_url: thumbnail.clone(),
            };
            busy.set(true);
            feedback.set(None);

            let session = auth.session.clone();
            let on_error = auth.on_error();
            let busy = busy.clone();
            let feedback = feedback.clone();
            let on_close = on_close.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = Accounts::new(&*service, session.as_ref()).save_model(form).await;
                busy.set(false);
                match result {
                    Ok(saved) => {
                        log!(format!("model saved as {}", saved.id));
                        on_saved.emit(saved);
                        let message = lang.t(Text::SaveModelSuccess).to_string();
                        feedback.set(Some(Feedback::Success(message)));
                        TimeoutFuture::new(CLOSE_AFTER_SAVE_MS).await;
                        on_close.emit(());
                    }
                    Err(err) => {
                        let message = error_text(err.display(lang), lang.t(Text::SaveModelError));
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

    html! {
        <YwMaterialTopSheet
            open={props.open}
            on_close={props.on_close.clone()}
            title={language.t(Text::SaveModelTitle).to_string()}
        >
            <form class="auth-form" onsubmit={on_save}>
                if let Some(thumbnail) = &props.thumbnail {
                    <img class="save-thumbnail" src={thumbnail.clone()} alt="" />
                }
                { text_field(
                    language.t(Text::SaveModelName),
                    "text",
                    &name,
                    Some(language.t(Text::SaveModelNamePlaceholder)),
                    disabled,
                    on_name,
                ) }
                <label class="field">
                    <span class="field-label">{ language.t(Text::SaveModelDescription) }</span>
                    <textarea
                        rows="3"
                        value={(*description).clone()}
                        placeholder={language.t(Text::SaveModelDescriptionPlaceholder)}
                        {disabled}
                        oninput={on_description}
                    />
                </label>
                { Feedback::view(feedback.as_ref()) }
                <div class="dialog-actions">
                    <button type="button" class="secondary-button" onclick={on_cancel}>
                        { language.t(Text::SaveModelCancel) }
                    </button>
                    <button type="submit" class="primary-button" {disabled}>
                        { language.t(if disabled { Text::SaveModelSaving } else { Text::SaveModelSave }) }
                    </button>
                </div>
            </form>
        </YwMaterialTopSheet>
    }
}
