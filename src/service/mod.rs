//! Business logic behind the commands and the moderation filter.
//!
//! Services here are independent of Serenity's gateway types: they take plain text and domain
//! models and return values the Discord layer knows how to send.

pub mod expression;
pub mod moderation;
