mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let state = startup::build_state(&config)?;

    tracing::info!("Starting kiran");

    bot::start::start_bot(&config, Arc::new(state)).await
}
