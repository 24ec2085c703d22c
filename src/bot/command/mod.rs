//! Application command definitions and routing.
//!
//! | Command | Handler |
//! |---|---|
//! | `/pic roll`, `/pic steal`, `/pic collection` | [`pic`] |
//! | `/pic-add` | [`pic_add`] |
//! | `/pic-give-all` | [`give_all`] |
//! | user context menu "Check Collection" | [`check_collection`] |

use serenity::all::{CommandInteraction, Context, CreateCommand, ResolvedOption, ResolvedValue, User};

use crate::{
    error::{internal::InternalError, AppError},
    state::BotState,
};

pub mod check_collection;
pub mod give_all;
pub mod pic;
pub mod pic_add;

/// Every application command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        pic::definition(),
        pic_add::definition(),
        give_all::definition(),
        check_collection::definition(),
    ]
}

/// Runs the handler for an application command.
///
/// Unknown command names are ignored; they can only come from a stale registration.
///
/// # Returns
/// - `Ok(())` - The command was answered
/// - `Err(AppError)` - The command failed before answering; the caller replies with the
///   error's user message
pub async fn dispatch(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    match interaction.data.name.as_str() {
        pic::NAME => pic::run(state, ctx, interaction).await,
        pic_add::NAME => pic_add::run(state, ctx, interaction).await,
        give_all::NAME => give_all::run(state, ctx, interaction).await,
        check_collection::NAME => check_collection::run(state, ctx, interaction).await,
        other => {
            dioxus_logger::tracing::warn!("Received unknown command {}", other);
            Ok(())
        }
    }
}

/// Finds a required string option by name.
fn string_option<'a>(options: &[ResolvedOption<'a>], name: &'static str) -> Result<&'a str, AppError> {
    options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == name => Some(value),
            _ => None,
        })
        .ok_or_else(|| InternalError::MissingInteractionData(name).into())
}

/// Finds a required user option by name.
fn user_option<'a>(options: &[ResolvedOption<'a>], name: &'static str) -> Result<&'a User, AppError> {
    options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::User(user, _) if option.name == name => Some(user),
            _ => None,
        })
        .ok_or_else(|| InternalError::MissingInteractionData(name).into())
}
