//! Domain models shared between the Discord transport layer and the command handlers.
//!
//! These types decouple the command dispatcher from Serenity's `Message`: the message handler
//! converts each inbound message into an `Invocation`, handlers answer with `Reply` values, and
//! the handler sends them. That keeps every command testable without a gateway connection.

pub mod channel;
pub mod invocation;
pub mod reply;
