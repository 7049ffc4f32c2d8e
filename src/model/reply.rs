use std::path::PathBuf;

/// Outbound action produced by a command handler, sent to the invoking channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain message content.
    Text(String),
    /// File read from disk at send time and uploaded as an attachment.
    Attachment(PathBuf),
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Reply::Text(content.into())
    }
}
