//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_admin_role, create_test_role, create_test_user};
//!
//! let staff = create_test_role(111111111, "Moderator", 0xFF0000, 10);
//! let admin = create_test_admin_role(222222222, "Owners", 20);
//! let member = create_test_user(333333333, "someone");
//! ```

pub mod role;
pub mod user;

pub use role::{create_test_admin_role, create_test_role};
pub use user::create_test_user;
