//! Test factory for creating Serenity GuildChannel objects.
//!
//! This module provides factory functions for creating mock Serenity `GuildChannel` structs
//! for testing purposes by deserializing JSON shaped like a Discord API channel payload.

use serenity::all::GuildChannel;

/// Discord channel type discriminator for guild text channels.
const GUILD_TEXT: u8 = 0;
/// Discord channel type discriminator for guild voice channels.
const GUILD_VOICE: u8 = 2;

/// Creates a test Serenity text channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name
/// - `position` - Sorting position in the guild's channel list
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel of kind `Text`
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::channel::create_test_text_channel;
///
/// let channel = create_test_text_channel(123456789, 987654321, "wall-of-shame", 3);
/// assert_eq!(channel.name, "wall-of-shame");
/// ```
pub fn create_test_text_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
) -> GuildChannel {
    create_test_channel(channel_id, guild_id, name, position, GUILD_TEXT)
}

/// Creates a test Serenity voice channel.
///
/// Voice channels can never receive moderation notices, which makes them useful for testing
/// that only text channels are considered.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name
/// - `position` - Sorting position in the guild's channel list
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel of kind `Voice`
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_voice_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
) -> GuildChannel {
    create_test_channel(channel_id, guild_id, name, position, GUILD_VOICE)
}

fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
    kind: u8,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "topic": null,
        "last_message_id": null,
        "parent_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
