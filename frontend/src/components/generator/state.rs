//! State of the generator screen.
//!
//! The job lifecycle itself lives in [`GenerationState`]; this struct adds
//! what only the page cares about: the prompt form, which dialog is open,
//! the captured thumbnail and the layout mode.

use std::rc::Rc;

use common::model::generation::GenerationOptions;
use common::model::image::{ImageSet, ImageUpload};
use common::model::material::MaterialSettings;
use common::workflow::GenerationState;
use gloo_file::ObjectUrl;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::helpers::MobileWatcher;

/// An image chosen in the form: the bytes to upload plus a preview URL.
#[derive(Clone)]
pub struct PickedImage {
    pub upload: ImageUpload,
    pub preview: Rc<ObjectUrl>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Options,
    Customize,
    Auth,
    Profile,
    SaveModel,
    SavedModels,
}

pub struct GeneratorComponent {
    pub prompt: String,
    pub images: ImageSet<PickedImage>,
    /// Files being read; they already count against the image cap.
    pub pending_reads: usize,
    pub options: GenerationOptions,
    /// Last surface settings applied to the displayed model.
    pub material: MaterialSettings,
    pub generation: GenerationState,
    /// Prompt form when true, result controls when false.
    pub show_prompt: bool,
    pub dialog: Option<Dialog>,
    pub thumbnail: Option<String>,
    pub dragging: bool,
    pub is_mobile: bool,
    pub menu_open: bool,
    pub viewer_ref: NodeRef,
    pub file_input_ref: NodeRef,
    pub mobile_watcher: Option<MobileWatcher>,
    pub thumbnail_timer: Option<Timeout>,
}

impl GeneratorComponent {
    pub fn new(mobile_watcher: Option<MobileWatcher>) -> Self {
        let is_mobile = mobile_watcher.as_ref().is_some_and(MobileWatcher::matches);
        Self {
            prompt: String::new(),
            images: ImageSet::new(),
            pending_reads: 0,
            options: GenerationOptions::default(),
            material: MaterialSettings::default(),
            generation: GenerationState::new(),
            show_prompt: true,
            dialog: None,
            thumbnail: None,
            dragging: false,
            is_mobile,
            menu_open: false,
            viewer_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            mobile_watcher,
            thumbnail_timer: None,
        }
    }

    /// Free image slots once pending reads land.
    pub fn free_slots(&self) -> usize {
        self.images.remaining().saturating_sub(self.pending_reads)
    }

    pub fn can_submit(&self) -> bool {
        !self.generation.is_loading() && (!self.prompt.trim().is_empty() || !self.images.is_empty())
    }
}
