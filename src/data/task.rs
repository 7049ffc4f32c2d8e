//! Per-guild task lists.
//!
//! Each guild owns an ordered list of free-text tasks. A guild that has never been touched is
//! indistinguishable from one with an empty list: every operation treats an absent entry as
//! empty, so `list` before the first `add` is not an error.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serenity::all::GuildId;

use crate::error::task::TaskError;

/// Key for a task list. Direct messages have no guild and share the `None` list.
pub type TaskListKey = Option<GuildId>;

/// Registry of task lists keyed by guild.
///
/// Every operation takes the lock once, reads and mutates inside that single critical section
/// and releases it before returning. The lock is never held across an `.await`.
#[derive(Default)]
pub struct TaskRegistry {
    lists: Mutex<HashMap<TaskListKey, Vec<String>>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task to the guild's list, creating the list if needed.
    ///
    /// # Returns
    /// - `usize` - 1-based number of the new task
    pub fn add(&self, guild: TaskListKey, task: String) -> usize {
        let mut lists = self.lock();
        let list = lists.entry(guild).or_default();
        list.push(task);
        list.len()
    }

    /// Snapshot of the guild's tasks in insertion order.
    pub fn list(&self, guild: TaskListKey) -> Vec<String> {
        self.lock().get(&guild).cloned().unwrap_or_default()
    }

    /// Removes the task at a 1-based index.
    ///
    /// # Arguments
    /// - `guild` - Guild whose list to modify
    /// - `index` - 1-based position as shown by `list`
    ///
    /// # Returns
    /// - `Ok(String)` - The removed task
    /// - `Err(TaskError::NotFound)` - Index is zero, negative or past the end; list unchanged
    pub fn remove(&self, guild: TaskListKey, index: i64) -> Result<String, TaskError> {
        let mut lists = self.lock();
        let list = lists.get_mut(&guild);

        let position = usize::try_from(index)
            .ok()
            .and_then(|index| index.checked_sub(1));

        match (list, position) {
            (Some(list), Some(position)) if position < list.len() => Ok(list.remove(position)),
            _ => Err(TaskError::NotFound { index }),
        }
    }

    /// Empties the guild's list.
    pub fn clear(&self, guild: TaskListKey) {
        if let Some(list) = self.lock().get_mut(&guild) {
            list.clear();
        }
    }

    /// A panic in another handler must not take the task lists down with it; every operation
    /// leaves the map consistent before any point that could panic.
    fn lock(&self) -> MutexGuard<'_, HashMap<TaskListKey, Vec<String>>> {
        self.lists.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
