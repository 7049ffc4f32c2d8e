//! Message event handler.
//!
//! Every message the bot can see goes through two stages:
//! 1. The profanity filter, which may post a shame notice.
//! 2. The command dispatcher, whose replies (or error report) are sent to the channel the
//!    message came from.
//!
//! The filter never prevents dispatch. Failures while sending are logged and reported where
//! possible, but never stop the bot.

use serenity::all::{
    ChannelId, Context, CreateAttachment, CreateMessage, GuildChannel, GuildId, Message,
};

use crate::{
    bot::command::Dispatcher,
    error::command::CommandError,
    model::{channel::GuildTextChannel, invocation::Invocation, reply::Reply},
    state::AppState,
    util::format::{code_block, error_report},
};

/// Handle a message posted in a guild channel or direct message.
///
/// # Arguments
/// - `state` - Shared application state
/// - `dispatcher` - Command table
/// - `ctx` - Discord context for the cache and HTTP client
/// - `message` - The inbound message
pub async fn handle_message(
    state: &AppState,
    dispatcher: &Dispatcher,
    ctx: Context,
    message: Message,
) {
    // Notices quoting a bad word would otherwise trigger the filter again
    if message.author.id == ctx.cache.current_user().id {
        return;
    }

    let invocation = invocation_from_message(&ctx, &message);

    if state.filter.is_offensive(&invocation.content) {
        let channels = guild_text_channels(&ctx, invocation.guild_id).await;
        if let Some(notice) = state.filter.check(&invocation, &channels) {
            tracing::info!(
                "Message {} from {} matched a bad-word pattern",
                message.id,
                message.author.id
            );
            if let Err(e) = notice.channel_id.say(&ctx.http, notice.content).await {
                tracing::error!(
                    "Failed to send shame notice to channel {}: {:?}",
                    notice.channel_id,
                    e
                );
            }
        }
    }

    let Some(result) = dispatcher.dispatch(state, &invocation) else {
        return;
    };

    let result = match result {
        Ok(replies) => send_replies(&ctx, invocation.channel_id, replies).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        report_command_error(&ctx, invocation.channel_id, &e).await;
    }
}

/// Converts a Serenity message into the dispatcher's view of it.
///
/// The author name is the guild nickname when one is set, otherwise the user's display name.
pub fn invocation_from_message(ctx: &Context, message: &Message) -> Invocation {
    let author_name = message
        .member
        .as_ref()
        .and_then(|member| member.nick.clone())
        .unwrap_or_else(|| message.author.display_name().to_string());

    Invocation {
        guild_id: message.guild_id,
        channel_id: message.channel_id,
        author_name,
        author_is_bot: message.author.bot,
        content: message.content_safe(&ctx.cache),
        mentions: message.mentions.iter().map(|user| user.id).collect(),
    }
}

/// Text channels of the guild in display order.
///
/// Reads the cache first and falls back to the HTTP API. Direct messages and lookup failures
/// yield an empty list, which sends notices to the originating channel.
async fn guild_text_channels(ctx: &Context, guild_id: Option<GuildId>) -> Vec<GuildTextChannel> {
    let Some(guild_id) = guild_id else {
        return Vec::new();
    };

    // The cache reference must be released before awaiting
    let cached: Option<Vec<GuildChannel>> = ctx
        .cache
        .guild(guild_id)
        .map(|guild| guild.channels.values().cloned().collect());

    let channels = match cached {
        Some(channels) => channels,
        None => match guild_id.channels(&ctx.http).await {
            Ok(channels) => channels.into_values().collect(),
            Err(e) => {
                tracing::warn!("Failed to fetch channels for guild {}: {:?}", guild_id, e);
                return Vec::new();
            }
        },
    };

    GuildTextChannel::from_guild_channels(channels)
}

/// Sends command replies in order, stopping at the first failure.
async fn send_replies(
    ctx: &Context,
    channel_id: ChannelId,
    replies: Vec<Reply>,
) -> Result<(), CommandError> {
    for reply in replies {
        match reply {
            Reply::Text(text) => {
                channel_id.say(&ctx.http, text).await?;
            }
            Reply::Attachment(path) => {
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|source| CommandError::Attachment {
                        path: path.clone(),
                        source,
                    })?;
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "attachment".to_string());

                let message = CreateMessage::new().add_file(CreateAttachment::bytes(bytes, filename));
                channel_id.send_message(&ctx.http, message).await?;
            }
        }
    }

    Ok(())
}

/// Logs a failed command and posts its report to the invoking channel.
async fn report_command_error(ctx: &Context, channel_id: ChannelId, error: &CommandError) {
    tracing::warn!("Command failed in channel {}: {}", channel_id, error);

    let report = code_block(&error_report(error));
    if let Err(e) = channel_id.say(&ctx.http, report).await {
        tracing::error!(
            "Failed to report command error to channel {}: {:?}",
            channel_id,
            e
        );
    }
}
