//! Aggregate statistics shown on the Overview page of a collection.

use std::fmt;

use crate::model::{rarity::Rarity, toof_pic::ToofPic};

/// How many pics of a group a user owns out of how many exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub owned: usize,
    pub total: usize,
}

impl Progress {
    /// Percentage owned. An empty group reports 0 rather than dividing by zero.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.owned as f64 / self.total as f64 * 100.0
    }

    /// Whether every pic of a non-empty group is owned.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.owned >= self.total
    }
}

/// Renders the parenthesised marker: `(💯)` when complete, else `(37.5%)`.
impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            write!(f, "(💯)")
        } else {
            write!(f, "({:.1}%)", self.percent())
        }
    }
}

/// Per-rarity and aggregate progress of a collection against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionOverview {
    /// One entry per drawable rarity, in rank order.
    pub tiers: Vec<(Rarity, Progress)>,
    /// Progress across the whole catalog.
    pub total: Progress,
}

impl CollectionOverview {
    /// Computes the overview of `owned` against `catalog`. Pure; never fails.
    pub fn new(owned: &[ToofPic], catalog: &[ToofPic]) -> Self {
        let count = |pics: &[ToofPic], rarity: Rarity| {
            pics.iter().filter(|pic| pic.rarity == rarity).count()
        };

        let tiers = Rarity::list()
            .iter()
            .map(|&rarity| {
                (
                    rarity,
                    Progress {
                        owned: count(owned, rarity),
                        total: count(catalog, rarity),
                    },
                )
            })
            .collect();

        Self {
            tiers,
            total: Progress {
                owned: owned.len(),
                total: catalog.len(),
            },
        }
    }

    /// Progress for a single rarity. `Unknown` always reports an empty group.
    pub fn tier(&self, rarity: Rarity) -> Progress {
        self.tiers
            .iter()
            .find(|(r, _)| *r == rarity)
            .map(|(_, progress)| *progress)
            .unwrap_or(Progress { owned: 0, total: 0 })
    }

    /// Renders the body text: one line per rarity followed by the total.
    pub fn describe(&self) -> String {
        let mut description = String::new();

        for &rarity in Rarity::list() {
            let progress = self.tier(rarity);
            description.push_str(&format!(
                "{} {} of {} {} pics {}\n",
                rarity.emoji(),
                progress.owned,
                progress.total,
                rarity,
                progress
            ));
        }

        description.push_str(&format!(
            "\n**TOTAL:** {} of {} pics {}\n",
            self.total.owned, self.total.total, self.total
        ));

        description
    }
}
