use crate::{
    error::command::CommandError,
    model::{invocation::Invocation, reply::Reply},
    service::expression,
    state::AppState,
    util::{
        format::{code_block, error_report},
        parse::require_rest,
    },
};

use super::Command;

pub fn command() -> Command {
    Command::handler(
        "sp",
        "Evaluate a symbolic math expression",
        "<expression>",
        sp,
    )
}

/// Evaluates an expression and replies with its pretty-printed form.
///
/// Evaluation failures are part of the normal reply, shown as an error report in the same
/// code block; only a missing expression is a command error.
fn sp(_state: &AppState, _invocation: &Invocation, args: &str) -> Result<Vec<Reply>, CommandError> {
    let input = require_rest("expression", args)?;

    let output = match expression::render(input) {
        Ok(rendered) => rendered,
        Err(e) => {
            tracing::debug!("Failed to evaluate {:?}: {}", input, e);
            error_report(&e)
        }
    };

    Ok(vec![Reply::text(code_block(&output))])
}
