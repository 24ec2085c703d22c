use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, Mentionable,
};

use crate::{
    bot::command::user_option, error::AppError, service::toof_pic::ToofPicService,
    state::BotState,
};

pub const NAME: &str = "pic-give-all";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Give a user every ToofPic.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Who gets the pics.")
                .required(true),
        )
}

/// Gives a user the whole catalog.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let options = interaction.data.options();
    let user = user_option(&options, "user")?;

    let created = ToofPicService::new(&state.db)
        .give_all(interaction.user.id.get(), state.owner_id, user.id.get())
        .await?;

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(format!("gave {} {} new pics", user.mention(), created))
            .ephemeral(true),
    );
    interaction.create_response(&ctx.http, response).await?;

    Ok(())
}
