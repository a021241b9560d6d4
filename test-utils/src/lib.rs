//! JimBot Test Utils
//!
//! Provides shared testing utilities for the bot's unit tests. This crate offers a
//! builder pattern for creating test contexts backed by a temporary directory that
//! holds the bot config file, plus factories for Serenity objects.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the temporary config directory
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for Serenity messages and threads
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context, optionally seeded with an existing
//! config file:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_activity() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_config_json(r#"{"log_channel_id": null, "activity": {"1": 4}}"#)
//!         .build()?;
//!
//!     let store = JsonFileStore::new(&test.config_path);
//!     // Load, mutate and inspect the config...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
