pub mod auth;
pub mod customize_dialog;
pub mod generator;
pub mod model_viewer;
pub mod models;
pub mod options_dialog;
pub mod status_indicator;
pub mod switchers;
pub mod toast;
