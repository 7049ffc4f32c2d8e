//! Profanity shaming.
//!
//! Every inbound message is checked against the bad-word patterns before command dispatch. A
//! match produces a notice naming the author, posted to the guild's shame channel when one
//! exists and to the originating channel otherwise. The check never blocks dispatch: a message
//! can both earn a notice and run as a command.

use regex::Regex;
use serenity::all::ChannelId;

use crate::model::{channel::GuildTextChannel, invocation::Invocation};

/// Appended to the upper-cased display name of the offender.
const SHAME_NOTICE_SUFFIX: &str = " SAID A BAD WORD";

/// Moderation notice ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShameNotice {
    pub channel_id: ChannelId,
    pub content: String,
}

/// Bad-word matcher and shame channel selector.
///
/// Both pattern sets are compiled once at startup and never change afterwards.
pub struct MessageFilter {
    /// Case-insensitive patterns; a match anywhere in the text counts.
    bad_words: Vec<Regex>,
    /// Case-insensitive, anchored pattern a channel name must match in full.
    shame_channel: Regex,
}

impl MessageFilter {
    /// Creates a filter from already compiled patterns.
    ///
    /// `shame_channel` must be anchored; `startup::compile_shame_channel_pattern` builds it
    /// that way.
    pub fn new(bad_words: Vec<Regex>, shame_channel: Regex) -> Self {
        Self {
            bad_words,
            shame_channel,
        }
    }

    pub fn pattern_count(&self) -> usize {
        self.bad_words.len()
    }

    /// Whether any bad-word pattern matches somewhere in the text.
    pub fn is_offensive(&self, text: &str) -> bool {
        self.bad_words.iter().any(|pattern| pattern.is_match(text))
    }

    /// First channel, in the given order, whose name fully matches the shame pattern.
    pub fn find_shame_channel(&self, channels: &[GuildTextChannel]) -> Option<ChannelId> {
        channels
            .iter()
            .find(|channel| self.shame_channel.is_match(&channel.name))
            .map(|channel| channel.channel_id)
    }

    /// Decides whether a message earns a moderation notice and where it goes.
    ///
    /// # Arguments
    /// - `invocation` - The inbound message
    /// - `channels` - Text channels of the message's guild in display order; empty for direct
    ///   messages or when the channel list could not be fetched
    ///
    /// # Returns
    /// - `Some(ShameNotice)` - The message matched a pattern
    /// - `None` - No pattern matched
    pub fn check(
        &self,
        invocation: &Invocation,
        channels: &[GuildTextChannel],
    ) -> Option<ShameNotice> {
        if !self.is_offensive(&invocation.content) {
            return None;
        }

        let channel_id = self
            .find_shame_channel(channels)
            .unwrap_or(invocation.channel_id);

        Some(ShameNotice {
            channel_id,
            content: shame_notice_text(&invocation.author_name),
        })
    }
}

/// Notice text for an offender.
pub fn shame_notice_text(display_name: &str) -> String {
    format!("{}{}", display_name.to_uppercase(), SHAME_NOTICE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::startup::{compile_bad_word, compile_shame_channel_pattern};
    use serenity::all::GuildId;

    const ORIGIN: u64 = 500;

    fn filter(bad_words: &[&str]) -> MessageFilter {
        MessageFilter::new(
            bad_words
                .iter()
                .map(|pattern| compile_bad_word(pattern).unwrap())
                .collect(),
            compile_shame_channel_pattern(".*wall.*of.*shame.*").unwrap(),
        )
    }

    fn invocation(content: &str) -> Invocation {
        Invocation {
            guild_id: Some(GuildId::new(1)),
            channel_id: ChannelId::new(ORIGIN),
            author_name: "Kiran".to_string(),
            author_is_bot: false,
            content: content.to_string(),
            mentions: Vec::new(),
        }
    }

    fn channel(id: u64, name: &str, position: u16) -> GuildTextChannel {
        GuildTextChannel {
            channel_id: ChannelId::new(id),
            name: name.to_string(),
            position,
        }
    }

    /// Tests that clean text never produces a notice.
    ///
    /// Expected: None even with a shame channel present
    #[test]
    fn clean_message_is_ignored() {
        let filter = filter(&["darn", "heck"]);
        let channels = [channel(1, "wall-of-shame", 0)];

        assert_eq!(filter.check(&invocation("have a nice day"), &channels), None);
    }

    /// Tests matching anywhere in the text, case-insensitively.
    ///
    /// Expected: offensive for substrings in any case
    #[test]
    fn matches_anywhere_case_insensitive() {
        let filter = filter(&["darn"]);

        assert!(filter.is_offensive("DARN it"));
        assert!(filter.is_offensive("oh darnation"));
        assert!(filter.is_offensive("well... DaRn"));
        assert!(!filter.is_offensive("d a r n"));
    }

    /// Tests that any one of several patterns is enough.
    ///
    /// Expected: offensive when only the last pattern matches
    #[test]
    fn any_pattern_matches() {
        let filter = filter(&["darn", r"\bheck\b"]);

        assert!(filter.is_offensive("what the heck"));
        assert!(!filter.is_offensive("checkers"));
    }

    /// Tests that the notice goes to the shame channel when one exists.
    ///
    /// Expected: notice addressed to "wall-of-shame" with the upper-cased name
    #[test]
    fn notice_goes_to_shame_channel() {
        let filter = filter(&["darn"]);
        let channels = [channel(1, "general", 0), channel(2, "wall-of-shame", 1)];

        let notice = filter.check(&invocation("darn"), &channels).unwrap();

        assert_eq!(notice.channel_id, ChannelId::new(2));
        assert_eq!(notice.content, "KIRAN SAID A BAD WORD");
    }

    /// Tests falling back to the originating channel.
    ///
    /// Expected: notice addressed to the origin when no name matches
    #[test]
    fn notice_falls_back_to_origin() {
        let filter = filter(&["darn"]);
        let channels = [channel(1, "general", 0), channel(2, "shame", 1)];

        let notice = filter.check(&invocation("darn"), &channels).unwrap();

        assert_eq!(notice.channel_id, ChannelId::new(ORIGIN));
    }

    /// Tests direct messages, which have no channel list.
    ///
    /// Expected: notice addressed to the origin
    #[test]
    fn direct_message_uses_origin() {
        let filter = filter(&["darn"]);
        let mut dm = invocation("darn");
        dm.guild_id = None;

        let notice = filter.check(&dm, &[]).unwrap();

        assert_eq!(notice.channel_id, ChannelId::new(ORIGIN));
    }

    /// Tests full-match semantics of the shame pattern.
    ///
    /// Verifies that names are matched case-insensitively with anything around the words,
    /// and that the words must appear in order.
    ///
    /// Expected: matches for the first three names only
    #[test]
    fn shame_pattern_is_full_match() {
        let filter = filter(&[]);

        for name in ["wall-of-shame", "The-WALL-of-SHAME", "wallofshame"] {
            assert!(
                filter
                    .find_shame_channel(&[channel(1, name, 0)])
                    .is_some(),
                "{name} should match"
            );
        }
        for name in ["shame-of-wall", "wall-shame", "general"] {
            assert!(
                filter
                    .find_shame_channel(&[channel(1, name, 0)])
                    .is_none(),
                "{name} should not match"
            );
        }
    }

    /// Tests that the first matching channel in order wins.
    ///
    /// Expected: the earlier of two matching channels
    #[test]
    fn first_matching_channel_wins() {
        let filter = filter(&["darn"]);
        let channels = [
            channel(7, "wall-of-shame", 0),
            channel(3, "wall-of-shame-2", 1),
        ];

        assert_eq!(filter.find_shame_channel(&channels), Some(ChannelId::new(7)));
    }

    /// Tests that the notice preserves non-ASCII names when upper-casing.
    ///
    /// Expected: Unicode upper-case applied
    #[test]
    fn upper_cases_unicode_names() {
        assert_eq!(shame_notice_text("élodie"), "ÉLODIE SAID A BAD WORD");
    }
}
