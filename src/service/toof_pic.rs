//! Catalog, roll and collection operations.

use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    data::{ownership::OwnershipRepository, toof_pic::ToofPicRepository},
    error::{toof_pic::ToofPicError, AppError},
    model::{
        browser::CollectionBrowser,
        collection::Collection,
        rarity::Rarity,
        toof_pic::{CreateToofPicParam, ToofPic},
    },
    service::draw::draw,
};

/// Result of a successful roll.
#[derive(Debug, Clone, PartialEq)]
pub struct Roll {
    /// The drawn pic.
    pub pic: ToofPic,
    /// `false` if the user already owned the pic.
    pub created: bool,
}

/// Service for rolls, catalog appends and collection views.
pub struct ToofPicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToofPicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Draws a pic for `user_id` and adds it to their collection.
    ///
    /// Rolling a pic the user already owns is not an error; the ledger is left as is and
    /// the result reports `created: false`.
    ///
    /// # Returns
    /// - `Ok(Roll)` - The drawn pic and whether it was new to the user
    /// - `Err(AppError::ToofPicErr(EmptyCatalog))` - Nothing to draw from
    /// - `Err(AppError::DbErr)` - Database error while reading the catalog or acquiring
    pub async fn roll<R: Rng + Send + ?Sized>(
        &self,
        user_id: u64,
        rng: &mut R,
    ) -> Result<Roll, AppError> {
        let catalog = ToofPicRepository::new(self.db).get_all().await?;
        let pic = draw(&catalog, rng)?.clone();

        let acquisition = OwnershipRepository::new(self.db)
            .acquire(user_id, &pic.id)
            .await?;

        if acquisition.created {
            tracing::info!("User {} rolled new pic {}", user_id, pic.id);
        } else {
            tracing::debug!("User {} rolled duplicate pic {}", user_id, pic.id);
        }

        Ok(Roll {
            pic,
            created: acquisition.created,
        })
    }

    /// Appends a pic to the catalog.
    ///
    /// # Arguments
    /// - `actor_id` - Discord ID of the user running the command
    /// - `privileged_id` - Discord ID allowed to manage the catalog
    /// - `param` - Rarity, name and link of the new pic
    ///
    /// # Returns
    /// - `Ok(ToofPic)` - The new catalog entry with its assigned id
    /// - `Err(AppError::ToofPicErr(Unauthorized))` - `actor_id` is not privileged
    /// - `Err(AppError::ToofPicErr(UnknownRarity))` - Pics can't be added to that tier
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn add_pic(
        &self,
        actor_id: u64,
        privileged_id: u64,
        param: CreateToofPicParam,
    ) -> Result<ToofPic, AppError> {
        ensure_privileged(actor_id, privileged_id, "pic-add")?;

        if param.rarity == Rarity::Unknown {
            return Err(ToofPicError::UnknownRarity(param.rarity).into());
        }

        let pic = ToofPicRepository::new(self.db).create(param).await?;

        tracing::info!("User {} added pic {} \"{}\"", actor_id, pic.id, pic.name);

        Ok(pic)
    }

    /// Gives `user_id` every pic in the catalog.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of pics that were new to the user
    /// - `Err(AppError::ToofPicErr(Unauthorized))` - `actor_id` is not privileged
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn give_all(
        &self,
        actor_id: u64,
        privileged_id: u64,
        user_id: u64,
    ) -> Result<u64, AppError> {
        ensure_privileged(actor_id, privileged_id, "pic-give-all")?;

        let created = OwnershipRepository::new(self.db).grant_all(user_id).await?;

        tracing::info!(
            "User {} gave all pics to user {} ({} new)",
            actor_id,
            user_id,
            created
        );

        Ok(created)
    }

    /// Gets the collection of `owner_id` along with the catalog it is measured against.
    ///
    /// The bot's own account is shown as owning the full catalog.
    ///
    /// # Arguments
    /// - `owner_id` - Discord ID of the user whose collection is viewed
    /// - `bot_id` - Discord ID of the bot itself
    pub async fn collection(
        &self,
        owner_id: u64,
        bot_id: u64,
    ) -> Result<(Collection, Vec<ToofPic>), AppError> {
        let catalog = ToofPicRepository::new(self.db).get_all().await?;

        let collection = if owner_id == bot_id {
            Collection::full_catalog(owner_id, &catalog)
        } else {
            OwnershipRepository::new(self.db)
                .get_collection(owner_id)
                .await?
        };

        Ok((collection, catalog))
    }

    /// Opens a collection browser for `owner_id`, starting on the overview page.
    pub async fn browser(&self, owner_id: u64, bot_id: u64) -> Result<CollectionBrowser, AppError> {
        let (collection, catalog) = self.collection(owner_id, bot_id).await?;

        tracing::debug!(
            "Opening collection of user {} ({} of {} pics)",
            owner_id,
            collection.len(),
            catalog.len()
        );

        Ok(CollectionBrowser::new(collection, &catalog))
    }
}

/// Rejects privileged commands from anyone but `privileged_id`.
fn ensure_privileged(actor_id: u64, privileged_id: u64, command: &str) -> Result<(), ToofPicError> {
    if actor_id != privileged_id {
        tracing::warn!("User {} tried to use {} without permission", actor_id, command);
        return Err(ToofPicError::Unauthorized);
    }

    Ok(())
}
