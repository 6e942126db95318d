//! Background jobs.
//!
//! - `ticket_sweep` - Hourly pass that discovers ticket creators and reminds idle ones

pub mod ticket_sweep;
