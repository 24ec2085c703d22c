mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing::{self, Level};

use crate::{
    config::Config, error::AppError, scheduler::cooldown_sweep,
    service::cooldown::CooldownService, state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dioxus_logger::init(Level::INFO).map_err(|e| AppError::LoggerErr(e.to_string()))?;

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::log_catalog(&db).await?;
    let cooldowns = CooldownService::new(config.roll_cooldown, config.steal_cooldown);

    tracing::info!("Starting ToofBot");

    cooldown_sweep::start_scheduler(cooldowns.clone()).await?;

    let state = BotState::new(db, cooldowns, config.owner_id);
    let client = bot::start::init_bot(&config, state).await?;

    bot::start::start_bot(client).await
}
