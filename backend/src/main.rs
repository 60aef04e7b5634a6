mod config;
mod error;
mod relay;
mod services;
mod static_files;
#[cfg(test)]
mod testing;

use std::io;
use std::thread;
use std::time::Duration;

use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use crate::config::RelayConfig;
use crate::relay::RelayState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            warn!("Ignoring .env file: {err}");
        }
    }

    let config = RelayConfig::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let url = config.url();
    let bind = (config.host.clone(), config.port);
    let static_dir = config.static_dir.clone();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("Could not open a browser: {err}");
            }
        });
    }

    info!("Relaying generation requests to {}", config.api_base);
    if let Some(dir) = &static_dir {
        info!("Serving frontend from {}", dir.display());
    }
    let state = RelayState::new(config).map_err(io::Error::other)?;

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(|cfg| services::configure(cfg, &state))
            .configure(|cfg| static_files::configure(cfg, static_dir.as_deref()))
            .default_service(web::route().to(static_files::serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
