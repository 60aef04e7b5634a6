mod save_model_dialog;
mod saved_models;

pub use save_model_dialog::SaveModelDialog;
pub use saved_models::SavedModelsDialog;
