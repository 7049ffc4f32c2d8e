//! Message formatting helpers for replies.

use std::error::Error;

/// Wraps text in a Discord code block so it renders in a monospace font.
///
/// Triple backticks inside the text would close the block early, so a zero-width space is
/// inserted after the first backtick of each run.
pub fn code_block(text: &str) -> String {
    format!("```\n{}\n```", text.replace("```", "`\u{200b}``"))
}

/// Renders an error and its full `source()` chain.
///
/// # Example output
///
/// ```text
/// Converting to "int" failed for parameter "task_index" (got "abc").
///
/// Caused by:
///     0: invalid digit found in string
/// ```
pub fn error_report(error: &dyn Error) -> String {
    let mut report = error.to_string();

    let mut causes = std::iter::successors(error.source(), |&cause| cause.source()).peekable();
    if causes.peek().is_some() {
        report.push_str("\n\nCaused by:");
        for (depth, cause) in causes.enumerate() {
            report.push_str(&format!("\n    {}: {}", depth, cause));
        }
    }

    report
}
