//! Guild text channel domain model.
//!
//! Only text channels can receive moderation notices, so this model is built from Serenity's
//! `GuildChannel` at the transport boundary and everything else is filtered out.

use serenity::all::{ChannelId, ChannelType, GuildChannel};

/// Text channel within a guild with its display name and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildTextChannel {
    pub channel_id: ChannelId,
    pub name: String,
    /// Position in the guild's channel list (for ordering).
    pub position: u16,
}

impl GuildTextChannel {
    /// Converts the text channels of a guild into domain models, ordered as Discord lists them.
    ///
    /// Non-text channels (voice, category, forum, ...) are dropped. Channels are sorted by
    /// position, with the channel id as a tie breaker since positions are not guaranteed to be
    /// unique.
    ///
    /// # Arguments
    /// - `channels` - All channels of a guild, in any order
    ///
    /// # Returns
    /// - `Vec<GuildTextChannel>` - Text channels sorted by position
    pub fn from_guild_channels(channels: impl IntoIterator<Item = GuildChannel>) -> Vec<Self> {
        let mut text_channels: Vec<Self> = channels
            .into_iter()
            .filter(|channel| channel.kind == ChannelType::Text)
            .map(|channel| Self {
                channel_id: channel.id,
                name: channel.name,
                position: channel.position,
            })
            .collect();

        text_channels.sort_by_key(|channel| (channel.position, channel.channel_id));
        text_channels
    }
}
