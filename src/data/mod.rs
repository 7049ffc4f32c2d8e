//! In-memory state stores.
//!
//! The bot keeps no persistent storage: every store here lives inside `AppState` for the
//! lifetime of the process and is lost on restart.

pub mod task;

#[cfg(test)]
mod test;
