//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for testing
//! purposes. These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_text_channel, create_test_voice_channel};
//!
//! #[test]
//! fn picks_shame_channel() {
//!     let general = create_test_text_channel(1, 100, "general", 0);
//!     let shame = create_test_text_channel(2, 100, "wall-of-shame", 1);
//!     let voice = create_test_voice_channel(3, 100, "wall of shame voice", 2);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `channel::create_test_text_channel` - Create a Serenity text GuildChannel
//! - `channel::create_test_voice_channel` - Create a Serenity voice GuildChannel

pub mod channel;

pub use channel::{create_test_text_channel, create_test_voice_channel};
