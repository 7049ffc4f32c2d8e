use crate::{
    error::command::CommandError,
    model::{invocation::Invocation, reply::Reply},
    state::AppState,
    util::parse::require_rest,
};

use super::Command;

pub fn command() -> Command {
    Command::handler("say", "Echo the given message", "<message>", say)
}

/// Echoes the argument text back to the channel.
///
/// The text comes from the clean content, so mentions are echoed as plain names and never
/// ping anyone a second time.
fn say(_state: &AppState, _invocation: &Invocation, args: &str) -> Result<Vec<Reply>, CommandError> {
    let message = require_rest("message", args)?;
    Ok(vec![Reply::text(message)])
}
