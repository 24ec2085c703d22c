//! Hosts a collection browser on an ephemeral interaction response.
//!
//! The browser is sent as the reply to the command that opened it. The hosting task
//! then collects component interactions on that message, applies them to the browser
//! and edits the message in place. After three minutes without input the components
//! are removed and the browser is dropped.

use std::time::Duration;

use dioxus_logger::tracing;
use serenity::all::{
    ButtonStyle, CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateActionRow, CreateButton, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption, EditInteractionResponse, ReactionType, User,
};

use crate::{
    bot::embed,
    error::AppError,
    model::browser::{BrowserView, CollectionBrowser, Page},
};

/// How long a browser waits for input before it is dropped.
const IDLE_TIMEOUT: Duration = Duration::from_secs(180);

const PAGE_SELECT_ID: &str = "toof_pic_page";
const PREVIOUS_ID: &str = "toof_pic_previous";
const NEXT_ID: &str = "toof_pic_next";
const SHARE_ID: &str = "toof_pic_share";

/// Sends `browser` as the response to `interaction` and serves it until it goes idle.
///
/// Only the user who ran the command can operate the browser.
///
/// # Arguments
/// - `ctx` - Discord context
/// - `interaction` - The command that opened the browser
/// - `owner` - The user whose collection is shown
/// - `browser` - Browser on its initial page
/// - `shareable` - Whether to offer the Share button
///
/// # Returns
/// - `Ok(())` - The browser was shown and has since gone idle
/// - `Err(AppError::DiscordErr)` - The initial response could not be sent
pub async fn host(
    ctx: &Context,
    interaction: &CommandInteraction,
    owner: &User,
    mut browser: CollectionBrowser,
    shareable: bool,
) -> Result<(), AppError> {
    let response = CreateInteractionResponse::Message(
        render(&browser, owner, shareable).ephemeral(true),
    );
    interaction.create_response(&ctx.http, response).await?;
    let message = interaction.get_response(&ctx.http).await?;

    while let Some(component) = message
        .await_component_interaction(&ctx.shard)
        .author_id(interaction.user.id)
        .timeout(IDLE_TIMEOUT)
        .await
    {
        if let Err(e) = handle_component(ctx, &component, &mut browser, owner, shareable).await {
            tracing::error!("Failed to update collection browser: {}", e);
        }
    }

    tracing::debug!(
        "Collection browser for user {} went idle",
        browser.owner_id()
    );

    // The interaction token may have expired by now; nothing to do if it has
    if let Err(e) = interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().components(Vec::new()))
        .await
    {
        tracing::debug!("Failed to remove browser components: {}", e);
    }

    Ok(())
}

/// Applies one component interaction to the browser and answers it.
async fn handle_component(
    ctx: &Context,
    component: &ComponentInteraction,
    browser: &mut CollectionBrowser,
    owner: &User,
    shareable: bool,
) -> Result<(), AppError> {
    match &component.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => {
            if let Some(value) = values.first() {
                browser.select_page(Page::from_value(value));
            }
        }
        ComponentInteractionDataKind::Button => match component.data.custom_id.as_str() {
            PREVIOUS_ID => {
                browser.previous();
            }
            NEXT_ID => {
                browser.next();
            }
            SHARE_ID if shareable => {
                if let Some(embed) = browser.share().and_then(|view| embed::view(view, owner)) {
                    component
                        .channel_id
                        .send_message(&ctx.http, CreateMessage::new().embed(embed))
                        .await?;
                }
                component
                    .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
                    .await?;
                return Ok(());
            }
            _ => {}
        },
        _ => {}
    }

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(render(browser, owner, shareable)),
        )
        .await?;

    Ok(())
}

/// Message content, embed and components for the browser's current state.
fn render(
    browser: &CollectionBrowser,
    owner: &User,
    shareable: bool,
) -> CreateInteractionResponseMessage {
    let view = browser.view();
    let message = CreateInteractionResponseMessage::new().components(components(browser, shareable));

    // Position within the page, only shown to the browsing user
    let embed = embed::view(view, owner).map(|embed| match view {
        BrowserView::Pic(_) => embed.footer(CreateEmbedFooter::new(format!(
            "{} of {}",
            browser.index() + 1,
            browser.current_pics().len()
        ))),
        _ => embed,
    });

    match (view, embed) {
        (_, Some(embed)) => message.content("").embeds(vec![embed]),
        (BrowserView::Empty(rarity), None) => message
            .content(format!("You don't have any {} ToofPics!", rarity))
            .embeds(Vec::new()),
        (_, None) => message,
    }
}

/// Page select menu on the first row; previous, next and share buttons on the second.
fn components(browser: &CollectionBrowser, shareable: bool) -> Vec<CreateActionRow> {
    let options = Page::all()
        .into_iter()
        .map(|page| {
            CreateSelectMenuOption::new(page.label(), page.value())
                .description(page.description())
                .emoji(ReactionType::Unicode(page.emoji().to_string()))
                .default_selection(page == browser.page())
        })
        .collect();
    let select = CreateSelectMenu::new(PAGE_SELECT_ID, CreateSelectMenuKind::String { options });

    let mut buttons = vec![
        CreateButton::new(PREVIOUS_ID)
            .emoji(ReactionType::Unicode("⏪".to_string()))
            .style(ButtonStyle::Secondary)
            .disabled(!browser.can_navigate()),
        CreateButton::new(NEXT_ID)
            .emoji(ReactionType::Unicode("⏩".to_string()))
            .style(ButtonStyle::Secondary)
            .disabled(!browser.can_navigate()),
    ];

    if shareable {
        buttons.push(
            CreateButton::new(SHARE_ID)
                .label("Share")
                .emoji(ReactionType::Unicode("⤴️".to_string()))
                .style(ButtonStyle::Primary)
                .disabled(!browser.can_share()),
        );
    }

    vec![
        CreateActionRow::SelectMenu(select),
        CreateActionRow::Buttons(buttons),
    ]
}
