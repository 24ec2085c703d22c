//! Rarity tiers for ToofPics.
//!
//! Every pic belongs to exactly one tier, encoded as the first character of its id. The
//! tier is resolved once when the pic is loaded and carried as a `Rarity` value from
//! then on. Tiers drive both the draw weights used by rolls and the canonical ordering
//! of collections.

use std::fmt;

/// Tier of a ToofPic.
///
/// Variants are declared in rank order, so the derived `Ord` sorts `Common < Rare <
/// Legendary < Unknown`. `Unknown` covers ids with an unrecognized prefix; it is never
/// drawn and always sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
    Unknown,
}

impl Rarity {
    /// Drawable tiers in rank order.
    const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Rare, Rarity::Legendary];

    /// Returns the drawable tiers in rank order. `Unknown` is never included.
    pub fn list() -> &'static [Rarity] {
        &Self::ALL
    }

    /// Resolves a tier from its id prefix character, case-insensitively.
    ///
    /// Never fails: unrecognized characters resolve to `Rarity::Unknown`.
    pub fn from_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'C' => Rarity::Common,
            'R' => Rarity::Rare,
            'L' => Rarity::Legendary,
            _ => Rarity::Unknown,
        }
    }

    /// Resolves the tier encoded in a pic id such as `"R004"`.
    pub fn from_pic_id(id: &str) -> Self {
        id.chars().next().map(Self::from_code).unwrap_or(Rarity::Unknown)
    }

    /// Prefix character used in pic ids.
    pub fn code(self) -> char {
        match self {
            Rarity::Common => 'C',
            Rarity::Rare => 'R',
            Rarity::Legendary => 'L',
            Rarity::Unknown => '?',
        }
    }

    /// Sort rank; strictly increasing across the drawable tiers.
    pub fn rank(self) -> u32 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Legendary => 3,
            Rarity::Unknown => 100,
        }
    }

    /// Relative draw weight. Each tier is ten times less likely than the one below it.
    pub fn weight(self) -> u32 {
        match self {
            Rarity::Common => 100,
            Rarity::Rare => 10,
            Rarity::Legendary => 1,
            Rarity::Unknown => 0,
        }
    }

    /// Lowercase display name, as used in messages ("common pics").
    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
            Rarity::Unknown => "unknown",
        }
    }

    /// Capitalized label for menus and command choices.
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Unknown => "Unknown",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Rarity::Common => "🐶",
            Rarity::Rare => "💎",
            Rarity::Legendary => "⭐",
            Rarity::Unknown => "❓",
        }
    }

    /// Embed colour as a hex integer.
    pub fn colour(self) -> u32 {
        match self {
            Rarity::Common => 0x2ECC71,
            Rarity::Rare => 0x3498DB,
            Rarity::Legendary => 0xF1C40F,
            Rarity::Unknown => 0x5865F2,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Rarity::Common => "Normal, run-of-the-mill ToofPics. (He is such a good boy).",
            Rarity::Rare => "ToofPics of a bit higher quality. They are blue flavored.",
            Rarity::Legendary => "The rarest, most awe-inspiring ToofPics money can buy.",
            Rarity::Unknown => "IDK wut these r.",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
