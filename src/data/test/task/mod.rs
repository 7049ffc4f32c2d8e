use crate::{data::task::TaskRegistry, error::task::TaskError};
use serenity::all::GuildId;

mod add;
mod clear;
mod list;
mod remove;

/// Builds a registry whose guild already holds the given tasks, in order.
fn registry_with(guild: GuildId, tasks: &[&str]) -> TaskRegistry {
    let registry = TaskRegistry::new();
    for task in tasks {
        registry.add(Some(guild), task.to_string());
    }
    registry
}
