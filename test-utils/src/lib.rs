//! Kiran Test Utils
//!
//! Provides shared testing utilities for the kiran bot. This crate offers a builder pattern
//! for creating test contexts backed by a temporary directory holding the files the bot reads
//! at startup (bad-word patterns, the dance attachment), plus factories for Serenity objects.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the temporary directory and file paths
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[test]
//! fn loads_patterns() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_bad_word("heck")
//!         .with_dance_file()
//!         .build()?;
//!
//!     let patterns = std::fs::read_to_string(&test.bad_words_path)?;
//!     // Load patterns, build state...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
