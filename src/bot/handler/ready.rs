//! Ready event handler for bot initialization.
//!
//! Fired once the bot has authenticated with the gateway. The application commands are
//! registered globally here, replacing whatever set was registered before.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for registering commands and setting activity
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing("with ToofPics")));

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} application commands", commands.len()),
        Err(e) => tracing::error!("Failed to register application commands: {}", e),
    }
}
