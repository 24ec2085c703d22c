use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Discord IDs are stored as strings; a row that fails to parse back into a
    /// `u64` means the table was written by something other than this bot.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// An interaction arrived without a piece of data Discord always sends for it.
    #[error("Interaction is missing {0}")]
    MissingInteractionData(&'static str),
}
