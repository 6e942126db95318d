//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let ticket = factory::ticket::create_ticket(&db).await?;
//!
//! // Customize
//! let ticket = factory::ticket::TicketFactory::new(&db)
//!     .channel_id(123)
//!     .creator_id(456)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod ticket;

pub use ticket::create_ticket;
