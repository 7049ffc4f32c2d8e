use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";
/// Token variable read by earlier deployments of the bot.
const LEGACY_TOKEN_VAR: &str = "KIRAN_TOKEN";

const DEFAULT_BAD_WORDS_PATH: &str = "bad_words.txt";
const DEFAULT_DANCE_PATH: &str = "dance.gif";
const DEFAULT_SHAME_CHANNEL_PATTERN: &str = ".*wall.*of.*shame.*";

pub struct Config {
    pub discord_bot_token: String,

    /// File with one bad-word regular expression per line.
    pub bad_words_path: PathBuf,
    /// Attachment sent by the `dance` command.
    pub dance_path: PathBuf,
    /// Pattern a channel name must fully match to receive moderation notices.
    pub shame_channel_pattern: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Only the token is required. It is read from `DISCORD_BOT_TOKEN`, falling back to
    /// `KIRAN_TOKEN`; blank values count as unset. The remaining variables fall back to the
    /// files next to the working directory.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: [TOKEN_VAR, LEGACY_TOKEN_VAR]
                .into_iter()
                .filter_map(&lookup)
                .find(|token| !token.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(TOKEN_VAR.to_string()))?,
            bad_words_path: lookup("BAD_WORDS_PATH")
                .unwrap_or_else(|| DEFAULT_BAD_WORDS_PATH.to_string())
                .into(),
            dance_path: lookup("DANCE_GIF_PATH")
                .unwrap_or_else(|| DEFAULT_DANCE_PATH.to_string())
                .into(),
            shame_channel_pattern: lookup("SHAME_CHANNEL_PATTERN")
                .unwrap_or_else(|| DEFAULT_SHAME_CHANNEL_PATTERN.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    /// Tests that only the token is required.
    ///
    /// Expected: Ok with default paths and shame pattern
    #[test]
    fn uses_defaults_when_only_token_is_set() {
        let config = Config::from_lookup(lookup(&[("DISCORD_BOT_TOKEN", "secret")])).unwrap();

        assert_eq!(config.discord_bot_token, "secret");
        assert_eq!(config.bad_words_path, PathBuf::from("bad_words.txt"));
        assert_eq!(config.dance_path, PathBuf::from("dance.gif"));
        assert_eq!(config.shame_channel_pattern, ".*wall.*of.*shame.*");
    }

    /// Tests that a missing token is a configuration error naming the variable.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN"))
    #[test]
    fn fails_without_token() {
        let result = Config::from_lookup(lookup(&[("BAD_WORDS_PATH", "words.txt")]));

        match result {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                assert_eq!(name, "DISCORD_BOT_TOKEN")
            }
            _ => panic!("expected missing token error"),
        }
    }

    /// Tests that a blank token counts as missing.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar)
    #[test]
    fn fails_with_blank_token() {
        let result = Config::from_lookup(lookup(&[("DISCORD_BOT_TOKEN", "  ")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));
    }

    /// Tests the legacy token variable.
    ///
    /// Expected: KIRAN_TOKEN used when DISCORD_BOT_TOKEN is unset or blank, never preferred
    #[test]
    fn falls_back_to_legacy_token() {
        let legacy_only = Config::from_lookup(lookup(&[("KIRAN_TOKEN", "old")])).unwrap();
        let blank_primary = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", " "),
            ("KIRAN_TOKEN", "old"),
        ]))
        .unwrap();
        let both = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "new"),
            ("KIRAN_TOKEN", "old"),
        ]))
        .unwrap();

        assert_eq!(legacy_only.discord_bot_token, "old");
        assert_eq!(blank_primary.discord_bot_token, "old");
        assert_eq!(both.discord_bot_token, "new");
    }

    /// Tests that every optional variable overrides its default.
    ///
    /// Expected: Ok with all overridden values
    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "secret"),
            ("BAD_WORDS_PATH", "/etc/kiran/words.txt"),
            ("DANCE_GIF_PATH", "/srv/cow.gif"),
            ("SHAME_CHANNEL_PATTERN", "shame"),
        ]))
        .unwrap();

        assert_eq!(config.bad_words_path, PathBuf::from("/etc/kiran/words.txt"));
        assert_eq!(config.dance_path, PathBuf::from("/srv/cow.gif"));
        assert_eq!(config.shame_channel_pattern, "shame");
    }
}
