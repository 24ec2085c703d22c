//! Ownership ledger repository.
//!
//! The ledger holds one row per `(owner, pic)` pair. Rows are created on first
//! acquisition, re-pointed to a new owner on transfer, and never deleted.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};

use crate::{
    error::AppError,
    model::{
        collection::Collection,
        ownership::{Acquisition, OwnedToofPic, Ownership, TransferOutcome},
        toof_pic::ToofPic,
    },
};

/// Repository providing database operations for the ownership ledger.
pub struct OwnershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnershipRepository<'a> {
    /// Creates a new OwnershipRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OwnershipRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets everything a user owns, joined with the catalog.
    ///
    /// # Arguments
    /// - `owner_id` - Discord ID of the owner
    ///
    /// # Returns
    /// - `Ok(Collection)` - Owned pics with acquisition timestamps, in canonical order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_collection(&self, owner_id: u64) -> Result<Collection, DbErr> {
        let rows = entity::prelude::ToofPicOwnership::find()
            .filter(entity::toof_pic_ownership::Column::OwnerId.eq(owner_id.to_string()))
            .find_also_related(entity::prelude::ToofPic)
            .all(self.db)
            .await?;

        let pics = rows
            .into_iter()
            .filter_map(|(ownership, pic)| {
                pic.map(|pic| OwnedToofPic {
                    pic: ToofPic::from_entity(pic),
                    acquired_at: ownership.acquired_at,
                })
            })
            .collect();

        Ok(Collection::new(owner_id, pics))
    }

    /// Gets the ledger record for a single `(owner, pic)` pair.
    ///
    /// # Returns
    /// - `Ok(Some(Ownership))` - The owner holds the pic
    /// - `Ok(None)` - The owner does not hold the pic
    /// - `Err(AppError)` - Database error or unparsable stored owner id
    pub async fn get(&self, owner_id: u64, pic_id: &str) -> Result<Option<Ownership>, AppError> {
        let entity = entity::prelude::ToofPicOwnership::find_by_id((
            owner_id.to_string(),
            pic_id.to_string(),
        ))
        .one(self.db)
        .await?;

        entity.map(Ownership::from_entity).transpose()
    }

    /// Gets every record for a pic across all owners.
    ///
    /// # Returns
    /// - `Ok(Vec<Ownership>)` - All current holders of the pic
    /// - `Err(AppError)` - Database error or unparsable stored owner id
    ///
    /// Used in tests to verify the ledger holds one record per pic after transfers.
    #[cfg(test)]
    pub async fn get_by_pic(&self, pic_id: &str) -> Result<Vec<Ownership>, AppError> {
        let entities = entity::prelude::ToofPicOwnership::find()
            .filter(entity::toof_pic_ownership::Column::PicId.eq(pic_id))
            .all(self.db)
            .await?;

        entities.into_iter().map(Ownership::from_entity).collect()
    }

    /// Counts all ledger records.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::ToofPicOwnership::find().count(self.db).await
    }

    /// Records that `owner_id` owns `pic_id`, unless it already does.
    ///
    /// Issued as a single `INSERT ... ON CONFLICT DO NOTHING`, so concurrent acquisitions
    /// of the same pair produce exactly one record. Re-acquiring an owned pic leaves the
    /// existing record, including its `acquired_at`, untouched.
    ///
    /// # Arguments
    /// - `owner_id` - Discord ID of the new owner
    /// - `pic_id` - Catalog id of the pic
    ///
    /// # Returns
    /// - `Ok(Acquisition { created: true })` - A new record was written
    /// - `Ok(Acquisition { created: false })` - The owner already had the pic
    /// - `Err(DbErr)` - Database error during insert (including an unknown pic id)
    pub async fn acquire(&self, owner_id: u64, pic_id: &str) -> Result<Acquisition, DbErr> {
        let inserted = entity::prelude::ToofPicOwnership::insert(
            entity::toof_pic_ownership::ActiveModel {
                owner_id: ActiveValue::Set(owner_id.to_string()),
                pic_id: ActiveValue::Set(pic_id.to_string()),
                acquired_at: ActiveValue::Set(Utc::now()),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::toof_pic_ownership::Column::OwnerId,
                entity::toof_pic_ownership::Column::PicId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(Acquisition {
            created: inserted > 0,
        })
    }

    /// Acquires every catalog pic for `owner_id` in one statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records created (pics already owned are skipped)
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn grant_all(&self, owner_id: u64) -> Result<u64, DbErr> {
        let pic_ids: Vec<String> = entity::prelude::ToofPic::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(|pic| pic.id)
            .collect();

        if pic_ids.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let models = pic_ids
            .into_iter()
            .map(|pic_id| entity::toof_pic_ownership::ActiveModel {
                owner_id: ActiveValue::Set(owner_id.to_string()),
                pic_id: ActiveValue::Set(pic_id),
                acquired_at: ActiveValue::Set(now),
            });

        entity::prelude::ToofPicOwnership::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::toof_pic_ownership::Column::OwnerId,
                    entity::toof_pic_ownership::Column::PicId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Moves `pic_id` from `from_id` to `to_id`.
    ///
    /// Issued as a single conditional `UPDATE ... WHERE owner_id = from AND pic_id = x`.
    /// Of several concurrent transfers of the same `(source, pic)`, the first to take the
    /// write lock re-points the record and the rest match zero rows. A recipient that
    /// already owns the pic trips the composite primary key and nothing is written.
    ///
    /// # Arguments
    /// - `from_id` - Discord ID of the current owner
    /// - `to_id` - Discord ID of the recipient
    /// - `pic_id` - Catalog id of the pic
    ///
    /// # Returns
    /// - `Ok(TransferOutcome::Transferred)` - Record now belongs to `to_id`, acquired now
    /// - `Ok(TransferOutcome::Collision)` - `to_id` already owns the pic; nothing changed
    /// - `Ok(TransferOutcome::NoRecord)` - `from_id` does not own the pic; nothing changed
    /// - `Err(DbErr)` - Database error; nothing changed
    pub async fn transfer(
        &self,
        from_id: u64,
        to_id: u64,
        pic_id: &str,
    ) -> Result<TransferOutcome, DbErr> {
        let now = Utc::now();
        let result = entity::prelude::ToofPicOwnership::update_many()
            .col_expr(
                entity::toof_pic_ownership::Column::OwnerId,
                Expr::value(to_id.to_string()),
            )
            .col_expr(
                entity::toof_pic_ownership::Column::AcquiredAt,
                Expr::value(now),
            )
            .filter(entity::toof_pic_ownership::Column::OwnerId.eq(from_id.to_string()))
            .filter(entity::toof_pic_ownership::Column::PicId.eq(pic_id))
            .exec(self.db)
            .await;

        let result = match result {
            Ok(result) => result,
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Ok(TransferOutcome::Collision);
            }
            Err(e) => return Err(e),
        };

        if result.rows_affected == 0 {
            return Ok(TransferOutcome::NoRecord);
        }

        Ok(TransferOutcome::Transferred(Ownership {
            owner_id: to_id,
            pic_id: pic_id.to_string(),
            acquired_at: now,
        }))
    }
}
