use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Result;
use dotenv::dotenv;
use log::info;

mod config;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;

use config::Config;
use services::AppState;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let state = web::Data::new(AppState::from_config(&config)?);

    info!(
        "Listening on {}:{} (model: {})",
        config.host, config.port, config.model
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
