use common::account::SavedModel;
use common::jobs::Job;
use common::model::asset::Asset;
use common::model::generation::GenerationOptions;
use common::model::material::MaterialSettings;
use common::workflow::WorkflowError;

use super::state::{Dialog, PickedImage};

pub enum Msg {
    PromptChanged(String),
    FilesPicked(Vec<web_sys::File>),
    /// `requested` is how many reads were reserved for this batch.
    ImagesRead { requested: usize, picked: Vec<PickedImage> },
    RemoveImage(usize),
    OpenFilePicker,
    Dragging(bool),
    Submit,
    JobUpdated { token: u64, job: Job },
    JobFinished { token: u64, result: Result<Asset, WorkflowError> },
    OpenDialog(Dialog),
    CloseDialog,
    ApplyOptions(GenerationOptions),
    ApplyMaterial(MaterialSettings),
    Back,
    Download,
    ViewInAr,
    SaveModel,
    CaptureThumbnail,
    OpenSavedModel(SavedModel),
    MobileChanged(bool),
    ToggleMenu(bool),
    DismissError,
}
