//! Domain models for the ToofPic system.
//!
//! Models are plain data plus pure logic; they never touch the database or Discord.
//! Entity-to-model conversion happens at the repository boundary through each model's
//! `from_entity` constructor.

pub mod browser;
pub mod collection;
pub mod overview;
pub mod ownership;
pub mod rarity;
pub mod toof_pic;
