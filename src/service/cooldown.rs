//! Per-user cooldowns for rolls and steals.
//!
//! This module provides the `CooldownService`, an in-memory rate limiter created once at
//! startup and shared through the bot state. Entries are keyed by action and user and
//! are lost on restart. Expired entries are dropped lazily on the next attempt and in
//! bulk by the cooldown sweep job.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::error::toof_pic::ToofPicError;

/// Default wait between two rolls by the same user.
pub const DEFAULT_ROLL_COOLDOWN: Duration = Duration::from_secs(5);

/// Default wait between two steals by the same user.
pub const DEFAULT_STEAL_COOLDOWN: Duration = Duration::from_secs(60);

/// Rate-limited actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooldownAction {
    Roll,
    Steal,
}

/// In-memory cooldown tracker.
///
/// Cloning is cheap; clones share the same entries.
#[derive(Clone)]
pub struct CooldownService {
    roll: Duration,
    steal: Duration,
    /// Time each user last started each action.
    entries: Arc<RwLock<HashMap<(CooldownAction, u64), Instant>>>,
}

impl CooldownService {
    /// Creates a new CooldownService with no active cooldowns.
    ///
    /// # Arguments
    /// - `roll` - Wait between two rolls by the same user
    /// - `steal` - Wait between two steals by the same user
    ///
    /// # Returns
    /// - `CooldownService` - New service instance
    pub fn new(roll: Duration, steal: Duration) -> Self {
        Self {
            roll,
            steal,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Cooldown length of an action.
    pub fn duration(&self, action: CooldownAction) -> Duration {
        match action {
            CooldownAction::Roll => self.roll,
            CooldownAction::Steal => self.steal,
        }
    }

    /// Starts `action` for `user_id` if the user is not on cooldown for it.
    ///
    /// On success the cooldown begins immediately, regardless of how the action itself
    /// turns out afterwards.
    ///
    /// # Arguments
    /// - `action` - The action being attempted
    /// - `user_id` - Discord ID of the user attempting it
    ///
    /// # Returns
    /// - `Ok(())` - The action may proceed; the cooldown has been recorded
    /// - `Err(ToofPicError::CooldownActive)` - The user must wait `remaining` first
    pub async fn try_start(&self, action: CooldownAction, user_id: u64) -> Result<(), ToofPicError> {
        let now = Instant::now();
        let cooldown = self.duration(action);
        let mut entries = self.entries.write().await;

        if let Some(started) = entries.get(&(action, user_id)) {
            let elapsed = now.saturating_duration_since(*started);
            if elapsed < cooldown {
                return Err(ToofPicError::CooldownActive {
                    remaining: cooldown - elapsed,
                });
            }
        }

        entries.insert((action, user_id), now);

        Ok(())
    }

    /// Drops every entry whose cooldown has elapsed.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();

        entries.retain(|(action, _), started| {
            now.saturating_duration_since(*started) < self.duration(*action)
        });

        before - entries.len()
    }

    /// Number of tracked entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
