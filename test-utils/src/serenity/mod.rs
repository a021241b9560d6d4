//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Message, GuildChannel) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's gateway
//! would send.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{message::create_test_message, thread::create_test_thread};
//!
//! #[tokio::test]
//! async fn test_events() {
//!     let message = create_test_message(1, 2, 3, false);
//!     let thread = create_test_thread(10, 20, "Bug report");
//!
//!     // Pass to event handling code...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects
//! - `thread::create_test_thread` - Create Serenity GuildChannel objects for threads

pub mod message;
pub mod thread;
