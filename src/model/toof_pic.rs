//! Domain models for ToofPic catalog entries.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::model::rarity::Rarity;

/// Number of digits the sequence part of a pic id is padded to.
const SEQUENCE_WIDTH: usize = 3;

/// Catalog entry for a collectible ToofPic.
///
/// Catalog entries are append-only: they are created by the privileged `pic-add`
/// command and never mutated or deleted afterwards. Equality is by id; ordering is by
/// rarity rank, then id.
#[derive(Debug, Clone)]
pub struct ToofPic {
    /// Rarity code followed by the zero-padded per-rarity sequence number (`"C001"`).
    pub id: String,
    /// Tier resolved from the id prefix at construction.
    pub rarity: Rarity,
    /// Display name.
    pub name: String,
    /// Link to the image.
    pub link: String,
    /// When the pic was added to the catalog.
    pub created_at: DateTime<Utc>,
}

impl ToofPic {
    /// Converts an entity model to a ToofPic domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `ToofPic` - The converted domain model with its rarity resolved
    pub fn from_entity(entity: entity::toof_pic::Model) -> Self {
        Self {
            rarity: Rarity::from_pic_id(&entity.id),
            id: entity.id,
            name: entity.name,
            link: entity.link,
            created_at: entity.created_at,
        }
    }

    /// Formats the id for the `sequence`-th pic of `rarity`.
    ///
    /// # Example
    /// `ToofPic::format_id(Rarity::Rare, 4)` is `"R004"`.
    pub fn format_id(rarity: Rarity, sequence: u64) -> String {
        format!(
            "{}{:0width$}",
            rarity.code(),
            sequence,
            width = SEQUENCE_WIDTH
        )
    }
}

impl PartialEq for ToofPic {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ToofPic {}

impl PartialOrd for ToofPic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ToofPic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rarity
            .rank()
            .cmp(&other.rarity.rank())
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Parameters for appending a new pic to the catalog.
///
/// The id is not supplied by the caller; it is derived from the rarity and the number
/// of pics of that rarity already in the catalog.
#[derive(Debug, Clone)]
pub struct CreateToofPicParam {
    /// Tier of the new pic. Must be one of the drawable tiers.
    pub rarity: Rarity,
    /// Display name.
    pub name: String,
    /// Link to the image.
    pub link: String,
}
