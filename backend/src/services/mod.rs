use actix_web::web;

use crate::error::json_error;
use crate::relay::RelayState;

pub mod generation;

/// Registers the relay state, the JSON body limits and every API route.
pub fn configure(cfg: &mut web::ServiceConfig, state: &RelayState) {
    cfg.app_data(web::Data::new(state.clone()))
        .app_data(
            web::JsonConfig::default()
                .limit(state.config().json_limit)
                .error_handler(json_error),
        )
        .service(generation::configure_routes());
}
