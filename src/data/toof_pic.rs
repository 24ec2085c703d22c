//! ToofPic catalog repository.
//!
//! The catalog is append-only: this repository can list, look up, count and append pics
//! but has no update or delete operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};

use crate::model::{
    rarity::Rarity,
    toof_pic::{CreateToofPicParam, ToofPic},
};

/// Inserts tried by `create` before a sequence number clash is returned as an error.
const CREATE_ATTEMPTS: u32 = 3;

/// Repository providing database operations for the ToofPic catalog.
pub struct ToofPicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToofPicRepository<'a> {
    /// Creates a new ToofPicRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ToofPicRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the whole catalog, sorted by rarity rank then id.
    ///
    /// # Returns
    /// - `Ok(Vec<ToofPic>)` - Every catalog entry (empty if none have been added)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<ToofPic>, DbErr> {
        let entities = entity::prelude::ToofPic::find().all(self.db).await?;

        let mut pics: Vec<ToofPic> = entities.into_iter().map(ToofPic::from_entity).collect();
        pics.sort();

        Ok(pics)
    }

    /// Gets a single catalog entry by its id.
    ///
    /// # Arguments
    /// - `id` - Pic id such as `"C001"`
    ///
    /// # Returns
    /// - `Ok(Some(ToofPic))` - Pic found
    /// - `Ok(None)` - No pic with that id
    /// - `Err(DbErr)` - Database error during query
    ///
    /// Used in tests to verify catalog state.
    #[cfg(test)]
    pub async fn get_by_id(&self, id: &str) -> Result<Option<ToofPic>, DbErr> {
        let entity = entity::prelude::ToofPic::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(ToofPic::from_entity))
    }

    /// Counts the catalog entries of one rarity.
    ///
    /// # Arguments
    /// - `rarity` - Rarity whose id prefix to count
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of pics of that rarity
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_by_rarity(&self, rarity: Rarity) -> Result<u64, DbErr> {
        entity::prelude::ToofPic::find()
            .filter(entity::toof_pic::Column::Id.starts_with(rarity.code().to_string()))
            .count(self.db)
            .await
    }

    /// Appends a new pic to the catalog.
    ///
    /// The id is the rarity code followed by the next sequence number for that rarity
    /// (count of existing pics of the rarity + 1). The id is the primary key, so of two
    /// concurrent appends of one rarity only one can claim a number; the other recounts
    /// and retries, up to `CREATE_ATTEMPTS` times.
    ///
    /// # Arguments
    /// - `param` - Rarity, name and link of the new pic
    ///
    /// # Returns
    /// - `Ok(ToofPic)` - The appended pic with its assigned id
    /// - `Err(DbErr)` - Database error during count or insert
    pub async fn create(&self, param: CreateToofPicParam) -> Result<ToofPic, DbErr> {
        let mut attempt = 1;

        loop {
            let existing = self.count_by_rarity(param.rarity).await?;

            let result = entity::toof_pic::ActiveModel {
                id: ActiveValue::Set(ToofPic::format_id(param.rarity, existing + 1)),
                name: ActiveValue::Set(param.name.clone()),
                link: ActiveValue::Set(param.link.clone()),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(self.db)
            .await;

            match result {
                Ok(entity) => return Ok(ToofPic::from_entity(entity)),
                Err(e)
                    if attempt < CREATE_ATTEMPTS
                        && matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                {
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
