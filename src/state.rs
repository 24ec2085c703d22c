//! Bot state shared across all interaction handlers.
//!
//! The state is created once during startup and cloned into the Discord event handler.
//! Every field is cheap to clone: `DatabaseConnection` is a pool handle and
//! `CooldownService` keeps its entries behind an `Arc`.

use sea_orm::DatabaseConnection;

use crate::service::cooldown::CooldownService;

#[derive(Clone)]
pub struct BotState {
    /// Database connection pool holding the catalog and the ownership ledger.
    pub db: DatabaseConnection,

    /// Roll and steal cooldowns. Lives only as long as the process.
    pub cooldowns: CooldownService,

    /// Discord ID allowed to manage the catalog.
    pub owner_id: u64,
}

impl BotState {
    /// Creates a new bot state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cooldowns` - Shared cooldown tracker
    /// - `owner_id` - Discord ID allowed to run privileged commands
    pub fn new(db: DatabaseConnection, cooldowns: CooldownService, owner_id: u64) -> Self {
        Self {
            db,
            cooldowns,
            owner_id,
        }
    }
}
