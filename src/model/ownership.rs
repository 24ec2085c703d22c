//! Domain models for the ToofPic ownership ledger.

use chrono::{DateTime, Utc};

use crate::{error::AppError, model::toof_pic::ToofPic, util::parse::parse_u64_from_string};

/// A single ledger record: `owner_id` has held `pic_id` since `acquired_at`.
///
/// At most one record exists per `(owner_id, pic_id)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Ownership {
    /// Discord ID of the owner.
    pub owner_id: u64,
    /// Catalog id of the owned pic.
    pub pic_id: String,
    /// When the current owner acquired the pic.
    pub acquired_at: DateTime<Utc>,
}

impl Ownership {
    /// Converts an entity model to an ownership domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Ownership)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - Stored owner id is not a valid u64
    pub fn from_entity(entity: entity::toof_pic_ownership::Model) -> Result<Self, AppError> {
        Ok(Self {
            owner_id: parse_u64_from_string(entity.owner_id)?,
            pic_id: entity.pic_id,
            acquired_at: entity.acquired_at,
        })
    }
}

/// A catalog entry joined with the time its owner acquired it.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedToofPic {
    pub pic: ToofPic,
    pub acquired_at: DateTime<Utc>,
}

/// Result of an acquire call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acquisition {
    /// `true` if a new record was written, `false` if the pic was already owned.
    pub created: bool,
}

/// Result of a ledger transfer.
///
/// Both failure variants leave the ledger untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferOutcome {
    /// The record now belongs to the recipient, with a fresh `acquired_at`.
    Transferred(Ownership),
    /// The recipient already owns the pic; the source keeps it.
    Collision,
    /// The source does not own the pic (e.g. it was stolen a moment earlier).
    NoRecord,
}
