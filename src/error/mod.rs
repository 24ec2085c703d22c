//! Error types and user-facing error messages.
//!
//! This module provides the bot's error hierarchy. `AppError` is the top-level error
//! type that wraps domain-specific errors and infrastructure failures; command handlers
//! return it and the interaction dispatcher turns it into a reply with
//! [`AppError::user_message`].

pub mod config;
pub mod internal;
pub mod toof_pic;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, toof_pic::ToofPicError};

/// Reply sent when a command fails for a reason the user can't do anything about.
const RETRY_MESSAGE: &str = "something went wrong :( try again in a bit";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// ToofPic rule violation (empty catalog, cooldown, self-steal, ...).
    ///
    /// Shown to the user verbatim; never logged as an error.
    #[error(transparent)]
    ToofPicErr(#[from] ToofPicError),

    /// Unexpected internal state, such as an unparsable stored ID.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Logger could not be installed at startup.
    #[error("Failed to initialize logger: {0}")]
    LoggerErr(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Whether the failure is transient and the user may simply retry.
    ///
    /// Domain errors are deliberate refusals, so retrying the same request
    /// would be refused again.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::ToofPicErr(_))
    }

    /// Converts the error into the text replied to the user.
    ///
    /// Domain errors are shown as-is. Everything else is logged with full details
    /// and replaced by a generic retry message to avoid leaking internals.
    pub fn user_message(&self) -> String {
        if !self.is_retryable() {
            return self.to_string();
        }

        tracing::error!("{}", self);
        RETRY_MESSAGE.to_string()
    }
}
