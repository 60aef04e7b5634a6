//! The signed-in user's saved models, newest first.

use common::account::{Accounts, SavedModel};
use common::i18n::Text;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::auth::{error_text, Feedback};
use crate::contexts::{AuthContext, LanguageContext};
use crate::tops_sheet::YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct SavedModelsDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Shows the model in the viewer.
    pub on_open: Callback<SavedModel>,
}

#[function_component(SavedModelsDialog)]
pub fn saved_models_dialog(props: &SavedModelsDialogProps) -> Html {
    let (Some(language), Some(auth)) = (use_context::<LanguageContext>(), use_context::<AuthContext>()) else {
        return html! {};
    };
    let lang = language.language;

    let models = use_state(Vec::<SavedModel>::new);
    let loading = use_state(|| false);
    let feedback = use_state(|| None::<Feedback>);

    {
        let models = models.clone();
        let loading = loading.clone();
        let feedback = feedback.clone();
        let auth = auth.clone();
        let user_id = auth.session.as_ref().map(|s| s.user.id.clone());
        use_effect_with((props.open, user_id), move |(open, _)| {
            if *open {
                if let Some(service) = auth.service.clone() {
                    loading.set(true);
                    feedback.set(None);
                    let session = auth.session.clone();
                    let on_error = auth.on_error();
                    spawn_local(async move {
                        match Accounts::new(&*service, session.as_ref()).list_models().await {
                            Ok(list) => models.set(list),
                            Err(err) => {
                                let message = error_text(err.display(lang), lang.t(Text::ModelsLoadError));
                                feedback.set(Some(Feedback::Error(message)));
                                on_error.emit(err);
                            }
                        }
                        loading.set(false);
                    });
                }
            }
        });
    }

    let open_model = |model: &SavedModel| {
        let model = model.clone();
        let on_open = props.on_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_open.emit(model.clone());
            on_close.emit(());
        })
    };
    let delete_model = |model: &SavedModel| {
        let id = model.id.clone();
        let models = models.clone();
        let feedback = feedback.clone();
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(service) = auth.service.clone() else {
                return;
            };
            let id = id.clone();
            let session = auth.session.clone();
            let models = models.clone();
            let feedback = feedback.clone();
            let on_error = auth.on_error();
            spawn_local(async move {
                match Accounts::new(&*service, session.as_ref()).delete_model(&id).await {
                    Ok(()) => {
                        let remaining = models.iter().filter(|m| m.id != id).cloned().collect();
                        models.set(remaining);
                    }
                    Err(err) => {
                        let message = error_text(err.display(lang), lang.t(Text::ModelsDeleteError));
                        feedback.set(Some(Feedback::Error(message)));
                        on_error.emit(err);
                    }
                }
            });
        })
    };

    let list = if *loading {
        html! { <div class="spinner" /> }
    } else if models.is_empty() {
        html! { <p class="empty">{ language.t(Text::ModelsEmpty) }</p> }
    } else {
        html! {
            <ul class="saved-models">
                { for models.iter().map(|model| html! {
                    <li class="saved-model" key={model.id.clone()}>
                        if let Some(thumbnail) = &model.thumbnail_url {
                            <img class="saved-thumbnail" src={thumbnail.clone()} alt="" />
                        } else {
                            <div class="saved-thumbnail placeholder-cube" />
                        }
                        <div class="saved-text">
                            <p class="saved-name">{ model.name.clone() }</p>
                            if let Some(description) = model.description.as_ref().filter(|d| !d.is_empty()) {
                                <p class="saved-description">{ description.clone() }</p>
                            }
                            <p class="saved-meta">
                                { format!("{} · {}", model.format.to_uppercase(), created_date(&model.created_at)) }
                            </p>
                        </div>
                        <div class="saved-actions">
                            <button class="secondary-button" onclick={open_model(model)}>
                                { language.t(Text::ModelsOpen) }
                            </button>
                            <button class="secondary-button danger" onclick={delete_model(model)}>
                                { language.t(Text::ModelsDelete) }
                            </button>
                        </div>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <YwMaterialTopSheet
            open={props.open}
            on_close={props.on_close.clone()}
            title={language.t(Text::UserMyModels).to_string()}
        >
            { Feedback::view(feedback.as_ref()) }
            { list }
        </YwMaterialTopSheet>
    }
}

/// Date part of a PostgREST timestamp.
fn created_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
