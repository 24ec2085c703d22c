//! Ownership factory for creating test ledger rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating ledger rows with customizable fields.
///
/// The referenced pic must already exist in the catalog.
pub struct OwnershipFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: u64,
    pic_id: String,
    acquired_at: DateTime<Utc>,
}

impl<'a> OwnershipFactory<'a> {
    /// Creates a new OwnershipFactory acquired at the current time.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - Discord ID of the owner
    /// - `pic_id` - Catalog id of the owned pic
    pub fn new(db: &'a DatabaseConnection, owner_id: u64, pic_id: impl Into<String>) -> Self {
        Self {
            db,
            owner_id,
            pic_id: pic_id.into(),
            acquired_at: Utc::now(),
        }
    }

    /// Sets the acquisition timestamp.
    pub fn acquired_at(mut self, acquired_at: DateTime<Utc>) -> Self {
        self.acquired_at = acquired_at;
        self
    }

    /// Builds and inserts the ledger row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::toof_pic_ownership::Model)` - Created ledger row
    /// - `Err(DbErr)` - Database error during insert (missing pic, duplicate row)
    pub async fn build(self) -> Result<entity::toof_pic_ownership::Model, DbErr> {
        entity::toof_pic_ownership::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id.to_string()),
            pic_id: ActiveValue::Set(self.pic_id),
            acquired_at: ActiveValue::Set(self.acquired_at),
        }
        .insert(self.db)
        .await
    }
}

/// Gives `owner_id` the pic `pic_id`, acquired now.
pub async fn create_ownership(
    db: &DatabaseConnection,
    owner_id: u64,
    pic_id: &str,
) -> Result<entity::toof_pic_ownership::Model, DbErr> {
    OwnershipFactory::new(db, owner_id, pic_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::create_pic};

    #[tokio::test]
    async fn creates_ownership_for_existing_pic() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_toof_pic_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let pic = create_pic(db, 'C').await?;
        let ownership = create_ownership(db, 42, &pic.id).await?;

        assert_eq!(ownership.owner_id, "42");
        assert_eq!(ownership.pic_id, pic.id);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_second_record_for_same_owner_and_pic() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_toof_pic_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let pic = create_pic(db, 'C').await?;
        create_ownership(db, 42, &pic.id).await?;
        let duplicate = create_ownership(db, 42, &pic.id).await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
