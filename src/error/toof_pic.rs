use std::time::Duration;
use thiserror::Error;

use crate::model::rarity::Rarity;

/// User-facing failures of the ToofPic commands.
///
/// None of these are fatal: each maps to a short reply to the user who ran the
/// command. The `Display` text is exactly what the user sees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToofPicError {
    /// A roll was attempted while the catalog has no pics.
    #[error("there r no ToofPics yet!")]
    EmptyCatalog,

    /// A user tried to steal from themselves.
    #[error("u cant steal from urself!")]
    SelfTargetDenied,

    /// A transfer found that the source no longer owns the pic, usually because
    /// another steal got there first.
    #[error("someone got to that pic before u!")]
    NoRecord,

    /// The actor used the command again before its cooldown elapsed.
    #[error("slow down!!! ({:.2}s)", remaining.as_secs_f64())]
    CooldownActive {
        /// Time left until the command can be used again
        remaining: Duration,
    },

    /// A non-privileged user tried to run a privileged command.
    #[error("u cant do that!")]
    Unauthorized,

    /// `pic-add` was given a rarity that cannot be drawn.
    #[error("{0} is not a rarity u can add pics to!")]
    UnknownRarity(Rarity),
}
