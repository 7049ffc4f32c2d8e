use std::path::Path;

use regex::{Regex, RegexBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::Config,
    data::task::TaskRegistry,
    error::{config::ConfigError, AppError},
    service::moderation::MessageFilter,
    state::AppState,
};

/// Initializes the tracing subscriber.
///
/// Honors `RUST_LOG` when set, otherwise logs this crate at debug level and everything else
/// (Serenity included) at info.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kiran=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the shared application state from configuration.
///
/// Reads and compiles every pattern up front so a bad configuration aborts the process before
/// it ever connects to Discord.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(AppState)` - State with an empty task registry and compiled message filter
/// - `Err(AppError::ConfigErr)` - Pattern file unreadable or a pattern is invalid
pub fn build_state(config: &Config) -> Result<AppState, AppError> {
    let bad_words = load_bad_words(&config.bad_words_path)?;
    let shame_channel = compile_shame_channel_pattern(&config.shame_channel_pattern)?;

    let filter = MessageFilter::new(bad_words, shame_channel);
    tracing::info!(
        "Loaded {} bad-word patterns from {}",
        filter.pattern_count(),
        config.bad_words_path.display()
    );

    Ok(AppState::new(
        TaskRegistry::new(),
        filter,
        config.dance_path.clone(),
    ))
}

/// Loads the bad-word pattern file, one regular expression per line.
///
/// Blank lines are skipped; an empty pattern would match every message.
///
/// # Returns
/// - `Ok(Vec<Regex>)` - Case-insensitive patterns in file order
/// - `Err(ConfigError::ReadPatternFile)` - File could not be read
/// - `Err(ConfigError::InvalidPattern)` - A line is not a valid regex, with its line number
pub fn load_bad_words(path: &Path) -> Result<Vec<Regex>, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| ConfigError::ReadPatternFile {
            path: path.to_path_buf(),
            source,
        })?;

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            compile_bad_word(line).map_err(|source| ConfigError::InvalidPattern {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            })
        })
        .collect()
}

pub fn compile_bad_word(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Compiles the shame channel pattern for full-match use.
///
/// The pattern is anchored on both ends so `is_match` only succeeds when the whole channel name
/// matches; `.` also matches newlines.
pub fn compile_shame_channel_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(&format!("^(?:{})$", pattern))
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .map_err(ConfigError::InvalidShamePattern)
}
