//! Weighted rarity draw over the catalog.

use rand::{seq::IndexedRandom, Rng};

use crate::{
    error::toof_pic::ToofPicError,
    model::{rarity::Rarity, toof_pic::ToofPic},
};

/// Draws one pic from `catalog`.
///
/// A tier is sampled in proportion to its draw weight, then a pic is picked uniformly
/// from the catalog entries of that tier. If the sampled tier has no entries it is
/// removed from the pool and a fresh weighted choice is made over the remaining tiers,
/// so a roll still succeeds while the rarer tiers are empty.
///
/// # Arguments
/// - `catalog` - The full catalog, in any order
/// - `rng` - Random source used for both the tier and the pic
///
/// # Returns
/// - `Ok(&ToofPic)` - The drawn pic
/// - `Err(ToofPicError::EmptyCatalog)` - No drawable tier has any entries
pub fn draw<'a, R: Rng + ?Sized>(
    catalog: &'a [ToofPic],
    rng: &mut R,
) -> Result<&'a ToofPic, ToofPicError> {
    let mut tiers: Vec<Rarity> = Rarity::list()
        .iter()
        .copied()
        .filter(|rarity| rarity.weight() > 0)
        .collect();

    loop {
        let tier = match tiers.choose_weighted(rng, |rarity| rarity.weight()) {
            Ok(tier) => *tier,
            Err(_) => return Err(ToofPicError::EmptyCatalog),
        };

        let candidates: Vec<&ToofPic> = catalog.iter().filter(|pic| pic.rarity == tier).collect();

        if let Some(pic) = candidates.choose(rng).copied() {
            return Ok(pic);
        }

        tiers.retain(|rarity| *rarity != tier);
    }
}
