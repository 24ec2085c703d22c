//! Discord bot integration for the ToofPic commands.
//!
//! The bot registers its application commands when it connects and answers every
//! command interaction from the event handler. Collection browsers are served by the
//! task that handled the command, which listens for component interactions on its own
//! message until the browser goes idle.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required. Interactions are delivered regardless of intents, and
//! the bot never reads message content.

pub mod browser;
pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
