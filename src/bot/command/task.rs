//! `task` command group over the per-guild task registry.

use serenity::all::Mentionable;

use crate::{
    error::{command::CommandError, task::TaskError},
    model::{invocation::Invocation, reply::Reply},
    state::AppState,
    util::parse::{parse_int_argument, require_rest},
};

use super::Command;

const EMPTY_LIST: &str = "There are no tasks. Yay!";

pub fn command() -> Command {
    Command::group(
        "task",
        "Manage tasks",
        vec![
            Command::handler("add", "Add new task", "<new_task>", add),
            Command::handler("list", "List tasks", "", list),
            Command::handler(
                "remove",
                "Remove task specified by its number",
                "<task_index>",
                remove,
            ),
            Command::handler("clear", "Remove all tasks", "", clear),
        ],
    )
}

/// Appends a task and notifies every mentioned user in one follow-up message.
fn add(state: &AppState, invocation: &Invocation, args: &str) -> Result<Vec<Reply>, CommandError> {
    let new_task = require_rest("new_task", args)?;

    let number = state.tasks.add(invocation.guild_id, new_task.to_string());
    tracing::debug!(
        "Added task #{} for {:?}: {}",
        number,
        invocation.guild_id,
        new_task
    );

    let mut replies = vec![Reply::text(format!("Added task {}", new_task))];
    if !invocation.mentions.is_empty() {
        let mentions: Vec<String> = invocation
            .mentions
            .iter()
            .map(|user| user.mention().to_string())
            .collect();
        replies.push(Reply::text(format!(
            "{} You have a new task!",
            mentions.join(" ")
        )));
    }

    Ok(replies)
}

fn list(state: &AppState, invocation: &Invocation, _args: &str) -> Result<Vec<Reply>, CommandError> {
    let tasks = state.tasks.list(invocation.guild_id);
    if tasks.is_empty() {
        return Ok(vec![Reply::text(EMPTY_LIST)]);
    }

    let lines: Vec<String> = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| format!("{}. {}", index + 1, task))
        .collect();

    Ok(vec![Reply::text(lines.join("\n"))])
}

/// Removes a task by its 1-based number. An out-of-range number is an ordinary reply, not an
/// error.
fn remove(
    state: &AppState,
    invocation: &Invocation,
    args: &str,
) -> Result<Vec<Reply>, CommandError> {
    let index = parse_int_argument("task_index", args)?;

    let reply = match state.tasks.remove(invocation.guild_id, index) {
        Ok(task) => format!("Deleted task {}", task),
        Err(e @ TaskError::NotFound { index }) => {
            tracing::debug!("No task #{} for {:?}", index, invocation.guild_id);
            e.to_string()
        }
    };

    Ok(vec![Reply::text(reply)])
}

fn clear(state: &AppState, invocation: &Invocation, _args: &str) -> Result<Vec<Reply>, CommandError> {
    state.tasks.clear(invocation.guild_id);
    Ok(vec![Reply::text("Cleared tasks")])
}
