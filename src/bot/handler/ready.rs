//! Ready event handler.
//!
//! Fired once per gateway session after the handshake completes. Nothing needs initializing
//! here, so the handler only logs which account the bot is running as.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
}
