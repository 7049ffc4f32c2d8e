use thiserror::Error;

/// Expected failures of task list operations.
///
/// These are not command errors: the task command turns them into an ordinary reply.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TaskError {
    /// The 1-based index does not refer to an existing task.
    #[error("No such task")]
    NotFound { index: i64 },
}
