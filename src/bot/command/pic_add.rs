use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::{command::string_option, embed},
    error::AppError,
    model::{rarity::Rarity, toof_pic::CreateToofPicParam},
    service::toof_pic::ToofPicService,
    state::BotState,
};

pub const NAME: &str = "pic-add";

pub fn definition() -> CreateCommand {
    let rarity = Rarity::list().iter().fold(
        CreateCommandOption::new(
            CommandOptionType::String,
            "rarity",
            "The rarity of the new ToofPic.",
        )
        .required(true),
        |option, rarity| option.add_string_choice(rarity.label(), rarity.code().to_string()),
    );

    CreateCommand::new(NAME)
        .description("Add a new Toof pic with a given image link.")
        .add_option(rarity)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "name",
                "What the new ToofPic will be called.",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "link",
                "A link to the ToofPic's image.",
            )
            .required(true),
        )
}

/// Appends a pic to the catalog and shows it to the owner.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let options = interaction.data.options();
    let rarity = string_option(&options, "rarity")?;
    let param = CreateToofPicParam {
        rarity: Rarity::from_pic_id(rarity),
        name: string_option(&options, "name")?.to_string(),
        link: string_option(&options, "link")?.to_string(),
    };

    let pic = ToofPicService::new(&state.db)
        .add_pic(interaction.user.id.get(), state.owner_id, param)
        .await?;

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content("pic added:")
            .embed(embed::pic(&pic))
            .ephemeral(true),
    );
    interaction.create_response(&ctx.http, response).await?;

    Ok(())
}
