//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds everything the command handlers and
//! the moderation filter need. The state is built once during startup, wrapped in an `Arc` and
//! handed to the Discord event handler, which passes a reference into every command.
//!
//! The state includes:
//! - Task registry holding the per-guild task lists
//! - Message filter with the compiled bad-word and shame channel patterns
//! - Path of the attachment sent by the `dance` command

use std::path::PathBuf;

use crate::{data::task::TaskRegistry, service::moderation::MessageFilter};

/// Application state containing shared resources.
///
/// Nothing here is persisted; the task lists live exactly as long as the process.
pub struct AppState {
    /// Per-guild task lists, mutated only through `TaskRegistry` methods.
    pub tasks: TaskRegistry,

    /// Bad-word matcher run on every inbound message before command dispatch.
    pub filter: MessageFilter,

    /// File sent by the `dance` command.
    ///
    /// Checked at send time rather than at startup; a missing file is reported as a command
    /// error.
    pub dance_path: PathBuf,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `tasks` - Task registry, normally empty at startup
    /// - `filter` - Compiled message filter
    /// - `dance_path` - Attachment for the `dance` command
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(tasks: TaskRegistry, filter: MessageFilter, dance_path: PathBuf) -> Self {
        Self {
            tasks,
            filter,
            dance_path,
        }
    }
}
