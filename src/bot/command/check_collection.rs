use serenity::all::{
    CommandInteraction, CommandType, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, ResolvedTarget,
};

use crate::{
    bot::browser,
    error::{internal::InternalError, AppError},
    service::toof_pic::ToofPicService,
    state::BotState,
};

pub const NAME: &str = "Check Collection";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME).kind(CommandType::User)
}

/// Opens another user's collection, read-only.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(ResolvedTarget::User(target, _)) = interaction.data.target() else {
        return Err(InternalError::MissingInteractionData("target user").into());
    };

    let bot_id = ctx.cache.current_user().id.get();
    let browser = ToofPicService::new(&state.db)
        .browser(target.id.get(), bot_id)
        .await?;

    if browser.overview().total.owned == 0 {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(format!("{} hasznt found any ToofPics :(", target.name))
                .ephemeral(true),
        );
        interaction.create_response(&ctx.http, response).await?;
        return Ok(());
    }

    browser::host(ctx, interaction, target, browser, false).await
}
