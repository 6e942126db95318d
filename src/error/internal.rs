use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Ticket rows store Discord snowflakes as strings; a row that fails to parse
    /// back into a `u64` was not written by this bot.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A slash command arrived without a required option, or with a value of the wrong kind.
    ///
    /// Discord validates options against the registered schema, so this means the
    /// registered command and the handler disagree.
    #[error("Invalid option '{name}' for command '{command}'")]
    InvalidCommandOption { command: String, name: String },
}
