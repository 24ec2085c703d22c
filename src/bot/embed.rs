//! Embed builders for pics and collection overviews.

use serenity::all::{CreateEmbed, CreateEmbedAuthor, User};

use crate::model::{browser::BrowserView, overview::CollectionOverview, toof_pic::ToofPic};

/// Overview colour once every pic in the catalog is collected.
const COMPLETE_COLOUR: u32 = 0xF1C40F;

/// Overview colour otherwise.
const OVERVIEW_COLOUR: u32 = 0x5865F2;

/// Embed showing a single pic in the colour of its rarity.
pub fn pic(pic: &ToofPic) -> CreateEmbed {
    CreateEmbed::new()
        .color(pic.rarity.colour())
        .author(CreateEmbedAuthor::new(format!(
            "{} \"{}\" • {}",
            pic.rarity.emoji(),
            pic.name,
            pic.id
        )))
        .image(&pic.link)
}

/// Embed summarizing `owner`'s collection, one line per rarity plus a total.
pub fn overview(overview: &CollectionOverview, owner: &User) -> CreateEmbed {
    let color = if overview.total.is_complete() {
        COMPLETE_COLOUR
    } else {
        OVERVIEW_COLOUR
    };

    CreateEmbed::new()
        .color(color)
        .author(
            CreateEmbedAuthor::new(format!("{}'s Collection Overview:", owner.name))
                .icon_url(owner.face()),
        )
        .description(overview.describe())
}

/// Embed for a browser view. Empty tier pages have no embed.
pub fn view(view: BrowserView<'_>, owner: &User) -> Option<CreateEmbed> {
    match view {
        BrowserView::Overview(stats) => Some(overview(stats, owner)),
        BrowserView::Pic(toof_pic) => Some(pic(toof_pic)),
        BrowserView::Empty(_) => None,
    }
}
