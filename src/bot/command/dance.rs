use crate::{
    error::command::CommandError,
    model::{invocation::Invocation, reply::Reply},
    state::AppState,
};

use super::Command;

pub fn command() -> Command {
    Command::handler("dance", "Send dancing cow GIF", "", dance)
}

/// Sends the configured GIF. The file is only read when the reply is sent, so a missing file
/// surfaces as `CommandError::Attachment` from the message handler.
fn dance(state: &AppState, _invocation: &Invocation, _args: &str) -> Result<Vec<Reply>, CommandError> {
    Ok(vec![Reply::Attachment(state.dance_path.clone())])
}
