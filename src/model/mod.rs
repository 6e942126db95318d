//! Domain models and operation parameter types.
//!
//! Entity rows are converted into these models at the repository boundary, and Serenity
//! objects are converted into them at the gateway boundary, so the tracker and the
//! verification service never see either directly.

pub mod member;
pub mod ticket;
pub mod verification;
