//! Storage for tracked tickets.
//!
//! The ticket tracker owns a single `TicketStore`. By default it is an in-memory map that is
//! lost on restart; when a database URL is configured the SeaORM-backed store persists the
//! same records to the `ticket` table.

pub mod ticket;

#[cfg(test)]
mod test;
