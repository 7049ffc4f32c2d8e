//! Error types for startup, command handling and the services behind the commands.
//!
//! `AppError` is the top-level error returned from `main`: anything that reaches it aborts the
//! process before or while connecting to Discord. Everything that can go wrong while handling a
//! single message is a `CommandError` instead, which the message handler reports back to the
//! invoking channel and then moves on.

pub mod command;
pub mod config;
pub mod expression;
pub mod task;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates the errors that are fatal to the bot process. Most variants use `#[from]` for
/// automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Covers a missing bot token and unreadable or invalid pattern files.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when the client cannot be built or the gateway
    /// connection fails.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
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
