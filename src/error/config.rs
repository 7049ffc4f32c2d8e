use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The bad-word pattern file could not be read.
    #[error("Failed to read bad-word pattern file {}", .path.display())]
    ReadPatternFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the bad-word pattern file is not a valid regular expression.
    #[error("Invalid pattern on line {line} of {}", .path.display())]
    InvalidPattern {
        path: PathBuf,
        /// 1-based line number in the pattern file
        line: usize,
        #[source]
        source: regex::Error,
    },

    /// The shame channel pattern is not a valid regular expression.
    #[error("Invalid shame channel pattern")]
    InvalidShamePattern(#[source] regex::Error),
}
