//! The `/pic` command group: roll, steal and collection.

use rand::{rngs::StdRng, SeedableRng};
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, Mentionable, ResolvedOption,
    ResolvedValue, User,
};

use crate::{
    bot::{browser, command::user_option, embed},
    error::{internal::InternalError, AppError},
    service::{
        cooldown::CooldownAction,
        steal::{StealFailure, StealOutcome, StealService},
        toof_pic::ToofPicService,
    },
    state::BotState,
};

pub const NAME: &str = "pic";

const ROLL: &str = "roll";
const STEAL: &str = "steal";
const COLLECTION: &str = "collection";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Commands relating to ToofPics.")
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            ROLL,
            "Get a random ToofPic.",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                STEAL,
                "Try to steal a ToofPic from another user.",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "target", "Who to steal from.")
                    .required(true),
            ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            COLLECTION,
            "See what Toof pics you've collected.",
        ))
}

pub async fn run(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let options = interaction.data.options();
    let Some(ResolvedOption {
        name,
        value: ResolvedValue::SubCommand(sub_options),
        ..
    }) = options.first()
    else {
        return Err(InternalError::MissingInteractionData("subcommand").into());
    };

    match *name {
        ROLL => roll(state, ctx, interaction).await,
        STEAL => {
            let target = user_option(sub_options, "target")?;
            steal(state, ctx, interaction, target).await
        }
        COLLECTION => collection(state, ctx, interaction).await,
        _ => Err(InternalError::MissingInteractionData("subcommand").into()),
    }
}

/// Draws a pic for the user and posts it publicly.
async fn roll(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let user_id = interaction.user.id.get();
    state.cooldowns.try_start(CooldownAction::Roll, user_id).await?;

    let mut rng = StdRng::from_os_rng();
    let roll = ToofPicService::new(&state.db).roll(user_id, &mut rng).await?;

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().embed(embed::pic(&roll.pic)),
    );
    interaction.create_response(&ctx.http, response).await?;

    Ok(())
}

/// Attempts a steal from `target`. Only a successful steal is posted publicly.
async fn steal(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
    target: &User,
) -> Result<(), AppError> {
    let actor = &interaction.user;
    state
        .cooldowns
        .try_start(CooldownAction::Steal, actor.id.get())
        .await?;

    let mut rng = StdRng::from_os_rng();
    let outcome = StealService::new(&state.db)
        .steal(actor.id.get(), target.id.get(), &mut rng)
        .await?;

    let message = match outcome {
        StealOutcome::Stolen(pic) => CreateInteractionResponseMessage::new()
            .content(format!(
                "{} stole a {} from {} !",
                actor.mention(),
                pic.id,
                target.mention()
            ))
            .embed(embed::pic(&pic)),
        StealOutcome::Collision(pic) => CreateInteractionResponseMessage::new()
            .content(format!(
                "u tried to steal a {} from {}, but u already hav 1!",
                pic.id,
                target.mention()
            ))
            .embed(embed::pic(&pic))
            .ephemeral(true),
        StealOutcome::Failed(StealFailure::NoEffect) => CreateInteractionResponseMessage::new()
            .content("you failed.")
            .ephemeral(true),
        StealOutcome::Failed(StealFailure::EmptyTarget) => CreateInteractionResponseMessage::new()
            .content(format!(
                "{} doesn't have any pics to steal !",
                target.mention()
            ))
            .ephemeral(true),
    };

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Opens the user's own collection in a browser they can share from.
async fn collection(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let bot_id = ctx.cache.current_user().id.get();
    let browser = ToofPicService::new(&state.db)
        .browser(interaction.user.id.get(), bot_id)
        .await?;

    browser::host(ctx, interaction, &interaction.user, browser, true).await
}
