//! Discord bot integration.
//!
//! The bot connects through Serenity's gateway client and reacts to two events: `ready`, which
//! only logs, and `message`, which runs the profanity filter and then the command dispatcher.
//! Commands themselves live in [`command`] and never touch Serenity's HTTP client; replies are
//! sent by the message handler.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data in the cache, used to find the shame channel
//! - `GUILD_MESSAGES` - Receive messages posted in guilds
//! - `DIRECT_MESSAGES` - Receive messages sent to the bot directly
//! - `MESSAGE_CONTENT` - Read message text (privileged intent)
//! - `GUILD_MEMBERS` - Resolve member nicknames and mentions (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer Portal for the
//! bot application.

pub mod command;
pub mod handler;
pub mod start;
