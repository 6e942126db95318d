//! Error types for the bot.
//!
//! `AppError` is the top-level error type. It wraps the domain-specific errors of each
//! integration (configuration, database, Discord, Google Sheets, scheduler) so that every
//! fallible operation can use `?` and be logged at the boundary where it is handled.

pub mod config;
pub mod internal;
pub mod sheets;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, sheets::SheetsError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. None of these errors terminate
/// the process once the bot is running; callers log them and carry on.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Google Sheets access or write error.
    #[error(transparent)]
    SheetsErr(#[from] SheetsError),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected internal state.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// The ticket tracker task has stopped and no longer accepts messages.
    #[error("Ticket tracker is not running")]
    TrackerUnavailable,

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
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
