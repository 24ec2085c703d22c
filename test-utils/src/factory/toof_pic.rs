//! ToofPic factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating catalog entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::toof_pic::ToofPicFactory;
///
/// let pic = ToofPicFactory::new(&db, 'R')
///     .sequence(7)
///     .name("Sleepy Toof")
///     .build()
///     .await?;
/// assert_eq!(pic.id, "R007");
/// ```
pub struct ToofPicFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    link: String,
}

impl<'a> ToofPicFactory<'a> {
    /// Creates a new ToofPicFactory with default values.
    ///
    /// Defaults:
    /// - id: rarity code followed by a unique, zero-padded sequence number
    /// - name: `"Toof {sequence}"`
    /// - link: `"https://cdn.example.com/toof/{id}.png"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `rarity_code` - Leading rarity character (`C`, `R`, `L`, ...)
    pub fn new(db: &'a DatabaseConnection, rarity_code: char) -> Self {
        let sequence = next_id();
        let id = format!("{}{:03}", rarity_code.to_ascii_uppercase(), sequence);
        Self {
            db,
            link: format!("https://cdn.example.com/toof/{}.png", id),
            name: format!("Toof {}", sequence),
            id,
        }
    }

    /// Replaces the sequence number while keeping the rarity code.
    pub fn sequence(mut self, sequence: u32) -> Self {
        let code = self.id.chars().next().unwrap_or('C');
        self.id = format!("{}{:03}", code, sequence);
        self
    }

    /// Sets the exact id, including the rarity code.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Builds and inserts the catalog entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::toof_pic::Model)` - Created catalog entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::toof_pic::Model, DbErr> {
        entity::toof_pic::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            link: ActiveValue::Set(self.link),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catalog entry of the given rarity with default values.
pub async fn create_pic(
    db: &DatabaseConnection,
    rarity_code: char,
) -> Result<entity::toof_pic::Model, DbErr> {
    ToofPicFactory::new(db, rarity_code).build().await
}

/// Creates a catalog entry with an exact id such as `"C001"`.
pub async fn create_pic_with_id(
    db: &DatabaseConnection,
    id: impl Into<String>,
) -> Result<entity::toof_pic::Model, DbErr> {
    let id = id.into();
    let code = id.chars().next().unwrap_or('C');
    ToofPicFactory::new(db, code).id(id).build().await
}
