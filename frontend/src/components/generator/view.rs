//! View of the generator screen.
//!
//! The viewer fills the page; the header, the prompt form (or the result
//! controls) and the status line float above it. On narrow screens the
//! header links and switchers move into a slide-in menu.

use common::account::SavedModel;
use common::i18n::{Language, Text};
use common::model::generation::GenerationOptions;
use common::model::material::MaterialSettings;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{image_files, is_submit_key};
use super::messages::Msg;
use super::state::{Dialog, GeneratorComponent};
use crate::components::auth::{AuthDialog, ProfileDialog, UserMenu};
use crate::components::customize_dialog::CustomizeDialog;
use crate::components::model_viewer::ModelViewer;
use crate::components::models::{SaveModelDialog, SavedModelsDialog};
use crate::components::options_dialog::OptionsDialog;
use crate::components::status_indicator::StatusIndicator;
use crate::components::switchers::{LanguageSwitcher, ThemeSwitcher};

const WEBSITE_URL: &str = "https://hyper3d.ai";
const DOCS_URL: &str = "https://developer.hyper3d.ai";

pub fn view(component: &GeneratorComponent, ctx: &Context<GeneratorComponent>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let language = props.language;
    let asset = component.generation.asset();

    html! {
        <div class={classes!("generator", props.theme.as_str(), component.is_mobile.then_some("mobile"))}>
            <ModelViewer
                src={asset.map(|asset| AttrValue::from(asset.viewer_url()))}
                alt={asset.map(|asset| AttrValue::from(asset.name.clone()))}
                node_ref={component.viewer_ref.clone()}
            />
            { build_header(component, link, language) }
            { build_mobile_menu(component, link, language) }
            <main class="overlay">
                if component.generation.is_loading() {
                    <StatusIndicator job={component.generation.job().cloned()} />
                }
                { build_error(component, link, language) }
                if component.show_prompt || asset.is_none() {
                    { build_prompt_form(component, link, language) }
                } else {
                    { build_result_controls(component, link, language) }
                }
            </main>
            { build_dialogs(component, link) }
            <footer class="app-footer">{ language.t(Text::AppPowered) }</footer>
        </div>
    }
}

fn external_links(language: Language) -> Html {
    html! {
        <>
            <a href={WEBSITE_URL} target="_blank" rel="noopener noreferrer" class="external-link">
                { language.t(Text::AppWebsite) }{ " ↗" }
            </a>
            <a href={DOCS_URL} target="_blank" rel="noopener noreferrer" class="external-link">
                { language.t(Text::AppDocs) }{ " ↗" }
            </a>
        </>
    }
}

fn user_menu(link: &Scope<GeneratorComponent>, compact: bool) -> Html {
    html! {
        <UserMenu
            {compact}
            on_sign_in={link.callback(|_| Msg::OpenDialog(Dialog::Auth))}
            on_profile={link.callback(|_| Msg::OpenDialog(Dialog::Profile))}
            on_my_models={link.callback(|_| Msg::OpenDialog(Dialog::SavedModels))}
        />
    }
}

fn build_header(component: &GeneratorComponent, link: &Scope<GeneratorComponent>, language: Language) -> Html {
    html! {
        <header class="app-header">
            <div class="brand">
                <h1>{ language.t(Text::AppTitle) }</h1>
            </div>
            if component.is_mobile {
                <button
                    class="icon-button menu-button"
                    onclick={link.callback(|_| Msg::ToggleMenu(true))}
                    aria-label="Menu"
                >
                    { "☰" }
                </button>
            } else {
                <nav class="header-nav">
                    { external_links(language) }
                    <LanguageSwitcher />
                    <ThemeSwitcher />
                    { user_menu(link, false) }
                </nav>
            }
        </header>
    }
}

fn build_mobile_menu(component: &GeneratorComponent, link: &Scope<GeneratorComponent>, language: Language) -> Html {
    if !(component.is_mobile && component.menu_open) {
        return html! {};
    }
    html! {
        <div class="drawer-backdrop" onclick={link.callback(|_| Msg::ToggleMenu(false))}>
            <aside class="drawer" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                <div class="drawer-header">
                    <h2>{ language.t(Text::AppTitle) }</h2>
                    <button class="icon-button" onclick={link.callback(|_| Msg::ToggleMenu(false))}>
                        { "✕" }
                    </button>
                </div>
                <section class="drawer-section">
                    <h3>{ language.t(Text::UserAccount) }</h3>
                    { user_menu(link, true) }
                </section>
                <section class="drawer-section">
                    <h3>{ language.t(Text::ThemeTitle) }</h3>
                    <ThemeSwitcher />
                </section>
                <section class="drawer-section">
                    <LanguageSwitcher />
                </section>
                <section class="drawer-section links">
                    { external_links(language) }
                </section>
            </aside>
        </div>
    }
}

fn build_error(component: &GeneratorComponent, link: &Scope<GeneratorComponent>, language: Language) -> Html {
    let Some(err) = component.generation.error() else {
        return html! {};
    };
    html! {
        <div class="error-banner" role="alert">
            <span>{ err.display(language) }</span>
            <button class="icon-button" onclick={link.callback(|_| Msg::DismissError)}>{ "✕" }</button>
        </div>
    }
}

fn build_prompt_form(component: &GeneratorComponent, link: &Scope<GeneratorComponent>, language: Language) -> Html {
    let loading = component.generation.is_loading();
    let mobile = component.is_mobile;

    let oninput = link.batch_callback(|event: InputEvent| {
        event
            .target()
            .and_then(|target| target.dyn_into::<HtmlTextAreaElement>().ok())
            .map(|area| Msg::PromptChanged(area.value()))
    });
    let onkeydown = link.batch_callback(move |event: KeyboardEvent| {
        if is_submit_key(&event.key(), event.shift_key(), mobile) {
            event.prevent_default();
            Some(Msg::Submit)
        } else {
            None
        }
    });
    let ondragover = link.callback(|event: DragEvent| {
        event.prevent_default();
        Msg::Dragging(true)
    });
    let ondragleave = link.callback(|_: DragEvent| Msg::Dragging(false));
    let ondrop = link.callback(|event: DragEvent| {
        event.prevent_default();
        Msg::FilesPicked(image_files(event.data_transfer().and_then(|data| data.files())))
    });
    let onchange = link.callback(|event: Event| {
        let input = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok());
        let files = input.as_ref().map(|input| image_files(input.files())).unwrap_or_default();
        if let Some(input) = input {
            input.set_value("");
        }
        Msg::FilesPicked(files)
    });

    html! {
        <div
            class={classes!("prompt-container", component.dragging.then_some("dragging"))}
            {ondragover}
            {ondragleave}
            {ondrop}
        >
            if !component.images.is_empty() {
                <div class="previews">
                    { for component.images.iter().enumerate().map(|(index, image)| html! {
                        <div class="preview" key={image.preview.to_string()}>
                            <img src={image.preview.to_string()} alt={image.upload.file_name.clone()} />
                            <button
                                class="remove-image"
                                onclick={link.callback(move |_| Msg::RemoveImage(index))}
                                aria-label={language.t(Text::FormRemoveImage)}
                            >
                                { "×" }
                            </button>
                        </div>
                    }) }
                </div>
            }
            if component.dragging {
                <div class="drop-hint">{ language.t(Text::FormDropImages) }</div>
            }
            <textarea
                class="prompt-input"
                rows="1"
                placeholder={language.t(Text::FormPlaceholder)}
                value={component.prompt.clone()}
                disabled={loading}
                {oninput}
                {onkeydown}
            />
            <div class="prompt-actions">
                <button
                    class="icon-button"
                    title={language.t(Text::FormAddImages)}
                    aria-label={language.t(Text::FormAddImages)}
                    disabled={loading || component.free_slots() == 0}
                    onclick={link.callback(|_| Msg::OpenFilePicker)}
                >
                    { "＋" }
                </button>
                <button class="pill-button" onclick={link.callback(|_| Msg::OpenDialog(Dialog::Options))}>
                    { language.t(Text::OptionsTitle) }
                </button>
                <button
                    class="primary-button"
                    disabled={!component.can_submit()}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { language.t(Text::FormSubmit) }
                </button>
            </div>
            <input
                ref={component.file_input_ref.clone()}
                type="file"
                accept="image/*"
                multiple=true
                hidden=true
                {onchange}
            />
        </div>
    }
}

fn build_result_controls(
    component: &GeneratorComponent,
    link: &Scope<GeneratorComponent>,
    language: Language,
) -> Html {
    let ar_label = if component.is_mobile { "AR" } else { language.t(Text::ControlsViewInAr) };
    html! {
        <div class="result-controls">
            <button class="pill-button" onclick={link.callback(|_| Msg::Back)}>
                { "← " }{ language.t(Text::ControlsBack) }
            </button>
            <button class="pill-button" onclick={link.callback(|_| Msg::OpenDialog(Dialog::Customize))}>
                { language.t(Text::ControlsCustomize) }
            </button>
            <button class="pill-button" onclick={link.callback(|_| Msg::ViewInAr)}>
                { ar_label }
            </button>
            <button class="pill-button" onclick={link.callback(|_| Msg::Download)}>
                { language.t(Text::ControlsDownload) }
            </button>
            <button class="primary-button" onclick={link.callback(|_| Msg::SaveModel)}>
                { language.t(Text::UserSaveModel) }
            </button>
        </div>
    }
}

fn build_dialogs(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    let is_open = |dialog: Dialog| component.dialog == Some(dialog);
    let on_close = link.callback(|_| Msg::CloseDialog);

    html! {
        <>
            <OptionsDialog
                open={is_open(Dialog::Options)}
                options={component.options.clone()}
                on_apply={link.callback(|options: GenerationOptions| Msg::ApplyOptions(options))}
                on_close={on_close.clone()}
            />
            <CustomizeDialog
                open={is_open(Dialog::Customize)}
                settings={component.material.clone()}
                on_apply={link.callback(|settings: MaterialSettings| Msg::ApplyMaterial(settings))}
                on_close={on_close.clone()}
            />
            <AuthDialog open={is_open(Dialog::Auth)} on_close={on_close.clone()} />
            <ProfileDialog open={is_open(Dialog::Profile)} on_close={on_close.clone()} />
            <SaveModelDialog
                open={is_open(Dialog::SaveModel)}
                asset={component.generation.asset().cloned()}
                thumbnail={component.thumbnail.clone()}
                on_close={on_close.clone()}
            />
            <SavedModelsDialog
                open={is_open(Dialog::SavedModels)}
                on_close={on_close}
                on_open={link.callback(|model: SavedModel| Msg::OpenSavedModel(model))}
            />
        </>
    }
}
