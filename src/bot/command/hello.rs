use crate::{
    error::command::CommandError,
    model::{invocation::Invocation, reply::Reply},
    state::AppState,
};

use super::Command;

pub fn command() -> Command {
    Command::handler("hello", "Say hello", "", hello)
}

/// Greets the author by display name.
fn hello(
    _state: &AppState,
    invocation: &Invocation,
    _args: &str,
) -> Result<Vec<Reply>, CommandError> {
    Ok(vec![Reply::text(format!(
        "Hello, {}!",
        invocation.author_name
    ))])
}
