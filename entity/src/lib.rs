//! SeaORM entity models for the ticketwatch database.

pub mod prelude;

pub mod ticket;
