//! Message handling for the generator screen.

use common::i18n::Text;
use common::model::material::MaterialSettings;
use common::workflow::{JobRunner, Submission};
use gloo_console::{error, log, warn};
use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{lock_scroll, open_in_new_tab, read_images};
use super::messages::Msg;
use super::state::{Dialog, GeneratorComponent};
use crate::components::model_viewer::{activate_ar, apply_material, capture_thumbnail};
use crate::components::toast::show_toast;
use crate::services::relay::{GlooSleeper, RelayApi};

/// The viewer needs a moment to render the model before it can be captured.
const THUMBNAIL_DELAY_MS: u32 = 2000;

pub fn update(component: &mut GeneratorComponent, ctx: &Context<GeneratorComponent>, msg: Msg) -> bool {
    let language = ctx.props().language;

    match msg {
        Msg::PromptChanged(prompt) => {
            component.prompt = prompt;
            true
        }
        Msg::FilesPicked(mut files) => {
            component.dragging = false;
            let free = component.free_slots();
            if files.len() > free {
                show_toast(language.t(Text::FormMaxImages));
                files.truncate(free);
            }
            if files.is_empty() {
                return true;
            }

            component.pending_reads += files.len();
            let requested = files.len();
            let link = ctx.link().clone();
            spawn_local(async move {
                let picked = read_images(files).await;
                if picked.len() < requested {
                    warn!(format!("{} of {requested} images could not be read", requested - picked.len()));
                }
                link.send_message(Msg::ImagesRead { requested, picked });
            });
            true
        }
        Msg::ImagesRead { requested, picked } => {
            component.pending_reads = component.pending_reads.saturating_sub(requested);
            if component.images.add_all(picked).hit_limit() {
                show_toast(language.t(Text::FormMaxImages));
            }
            true
        }
        Msg::RemoveImage(index) => component.images.remove(index).is_some(),
        Msg::OpenFilePicker => {
            if let Some(input) = component.file_input_ref.cast::<HtmlElement>() {
                input.click();
            }
            false
        }
        Msg::Dragging(dragging) => {
            let changed = component.dragging != dragging;
            component.dragging = dragging;
            changed
        }
        Msg::Submit => {
            if !component.can_submit() {
                return false;
            }
            let uploads = component.images.iter().map(|image| image.upload.clone());
            let submission = match Submission::new(component.prompt.clone(), component.options.clone())
                .with_images(uploads)
            {
                Ok(submission) => submission,
                Err(err) => {
                    show_toast(&err.display(language));
                    return false;
                }
            };

            let token = component.generation.begin();
            component.thumbnail = None;
            component.thumbnail_timer = None;
            log!(format!(
                "submitting prompt={:?} images={}",
                submission.prompt().unwrap_or_default(),
                submission.image_count()
            ));

            let link = ctx.link().clone();
            spawn_local(async move {
                let api = RelayApi::default();
                let sleeper = GlooSleeper;
                let runner = JobRunner::new(&api, &sleeper);
                let id = token.id();
                let updates = link.clone();
                let result = runner
                    .run(&submission, &token, |job| {
                        updates.send_message(Msg::JobUpdated {
                            token: id,
                            job: job.clone(),
                        })
                    })
                    .await;
                link.send_message(Msg::JobFinished { token: id, result });
            });
            true
        }
        Msg::JobUpdated { token, job } => component.generation.update(token, job),
        Msg::JobFinished { token, result } => {
            if let Err(err) = &result {
                if !err.is_superseded() {
                    error!(format!("generation failed: {err}"));
                }
            }
            if !component.generation.finish(token, result) {
                return false;
            }
            if component.generation.asset().is_some() {
                component.show_prompt = false;
                component.material = MaterialSettings::default();
                let link = ctx.link().clone();
                component.thumbnail_timer = Some(Timeout::new(THUMBNAIL_DELAY_MS, move || {
                    link.send_message(Msg::CaptureThumbnail)
                }));
            }
            true
        }
        Msg::OpenDialog(dialog) => {
            component.dialog = Some(dialog);
            component.menu_open = false;
            true
        }
        Msg::CloseDialog => {
            component.dialog = None;
            true
        }
        Msg::ApplyOptions(options) => {
            component.options = options;
            component.dialog = None;
            true
        }
        Msg::ApplyMaterial(settings) => {
            component.dialog = None;
            match apply_material(&component.viewer_ref, &settings) {
                Ok(count) => {
                    log!(format!("material settings applied to {count} materials"));
                    component.material = settings;
                }
                Err(err) => {
                    warn!("material settings not applied", err);
                    show_toast(language.t(Text::CustomizeUnavailable));
                }
            }
            true
        }
        Msg::Back => {
            component.show_prompt = true;
            true
        }
        Msg::Download => {
            if let Some(asset) = component.generation.asset() {
                open_in_new_tab(&asset.url);
            }
            false
        }
        Msg::ViewInAr => {
            if let Err(err) = activate_ar(&component.viewer_ref) {
                warn!("AR view unavailable", err);
            }
            false
        }
        Msg::SaveModel => {
            if !ctx.props().signed_in {
                component.dialog = Some(Dialog::Auth);
            } else if component.generation.asset().is_none() {
                show_toast(language.t(Text::SaveModelNoModel));
                return false;
            } else {
                component.dialog = Some(Dialog::SaveModel);
            }
            true
        }
        Msg::CaptureThumbnail => {
            component.thumbnail_timer = None;
            match capture_thumbnail(&component.viewer_ref) {
                Ok(data_url) => component.thumbnail = Some(data_url),
                Err(err) => warn!("thumbnail capture failed", err),
            }
            false
        }
        Msg::OpenSavedModel(model) => {
            component.generation.show(model.asset());
            component.material = MaterialSettings::default();
            component.thumbnail = model.thumbnail_url.clone();
            component.thumbnail_timer = None;
            component.show_prompt = false;
            true
        }
        Msg::MobileChanged(mobile) => {
            component.is_mobile = mobile;
            if !mobile {
                component.menu_open = false;
            }
            lock_scroll(mobile);
            true
        }
        Msg::ToggleMenu(open) => {
            component.menu_open = open;
            true
        }
        Msg::DismissError => {
            component.generation.dismiss_error();
            true
        }
    }
}
