use serenity::all::{ChannelId, GuildId, UserId};

/// Transport-independent view of an inbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Guild the message was posted in, `None` for direct messages.
    pub guild_id: Option<GuildId>,
    /// Channel the message was posted in; replies go here.
    pub channel_id: ChannelId,
    /// Author's display name in the guild (nickname when set).
    pub author_name: String,
    /// Whether the author is a bot account.
    pub author_is_bot: bool,
    /// Message text with mentions rendered as readable names.
    pub content: String,
    /// Users mentioned in the message, in mention order.
    pub mentions: Vec<UserId>,
}
