//! Interaction event handler.
//!
//! Routes application commands to their handlers and turns any error they return into
//! an ephemeral reply. Component interactions are not handled here: they belong to the
//! collection browser that created the component and are picked up by its collector.

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Interaction,
};

use crate::{bot::command, error::AppError, state::BotState};

/// Handles an interaction created event.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context
/// - `interaction` - The incoming interaction
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(interaction) = interaction else {
        return;
    };

    tracing::debug!(
        "User {} used command {}",
        interaction.user.id,
        interaction.data.name
    );

    if let Err(e) = command::dispatch(state, &ctx, &interaction).await {
        reply_with_error(&ctx, &interaction, e).await;
    }
}

/// Tells the user a command failed.
async fn reply_with_error(ctx: &Context, interaction: &CommandInteraction, error: AppError) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(error.user_message())
            .ephemeral(true),
    );

    if let Err(e) = interaction.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to reply to command {} with error: {}",
            interaction.data.name,
            e
        );
    }
}
