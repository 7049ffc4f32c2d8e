use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Recoverable failure while running a single command.
///
/// The message handler catches every `CommandError`, logs it and replies to the invoking
/// channel with the full error report in a code block. None of these stop the bot.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The name after the prefix is not a registered command.
    #[error("Command \"{0}\" is not found")]
    CommandNotFound(String),

    /// A required argument was not supplied.
    #[error("{param} is a required argument that is missing.")]
    MissingArgument { param: &'static str },

    /// An argument could not be converted to the type the command expects.
    #[error("Converting to \"int\" failed for parameter \"{param}\" (got \"{value}\").")]
    BadArgument {
        param: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A file attachment could not be read from disk.
    #[error("Failed to read attachment {}", .path.display())]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Discord API error from Serenity while sending a reply.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        CommandError::Discord(Box::new(err))
    }
}
