//! Ticketwatch Test Utils
//!
//! Provides shared testing utilities for the ticketwatch bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories for ticket
//! rows, and factories for Serenity objects deserialized from JSON.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Ticket;
//!
//! #[tokio::test]
//! async fn test_ticket_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Ticket)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
