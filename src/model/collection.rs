//! A user's ToofPic collection: the ledger view joined with the catalog.

use crate::model::{ownership::OwnedToofPic, rarity::Rarity, toof_pic::ToofPic};

/// The pics a user owns, sorted by rarity rank then id.
///
/// This is a derived, read-only view; it is never persisted. Building it from the ledger
/// is the job of `OwnershipRepository::get_collection`.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// Discord ID of the collection's owner.
    pub owner_id: u64,
    pics: Vec<OwnedToofPic>,
}

impl Collection {
    /// Creates a collection, sorting the pics into canonical order.
    pub fn new(owner_id: u64, mut pics: Vec<OwnedToofPic>) -> Self {
        pics.sort_by(|a, b| a.pic.cmp(&b.pic));
        Self { owner_id, pics }
    }

    /// A collection holding the whole catalog, used for the bot's own account.
    ///
    /// Each pic counts as acquired when it was added to the catalog.
    pub fn full_catalog(owner_id: u64, catalog: &[ToofPic]) -> Self {
        let pics = catalog
            .iter()
            .map(|pic| OwnedToofPic {
                pic: pic.clone(),
                acquired_at: pic.created_at,
            })
            .collect();
        Self::new(owner_id, pics)
    }

    /// Owned pics with their acquisition timestamps, in canonical order.
    pub fn owned(&self) -> &[OwnedToofPic] {
        &self.pics
    }

    /// Owned pics without timestamps, in canonical order.
    pub fn pics(&self) -> Vec<ToofPic> {
        self.pics.iter().map(|owned| owned.pic.clone()).collect()
    }

    /// Owned pics of a single rarity, in canonical order.
    pub fn of_rarity(&self, rarity: Rarity) -> Vec<ToofPic> {
        self.pics
            .iter()
            .filter(|owned| owned.pic.rarity == rarity)
            .map(|owned| owned.pic.clone())
            .collect()
    }

    #[cfg(test)]
    pub fn contains(&self, pic_id: &str) -> bool {
        self.pics.iter().any(|owned| owned.pic.id == pic_id)
    }

    pub fn len(&self) -> usize {
        self.pics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pics.is_empty()
    }
}
