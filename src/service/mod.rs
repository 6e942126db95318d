//! Service layer for business logic and orchestration.
//!
//! Services sit between the Discord event handlers and the external systems the bot talks
//! to. Each external system is reached through a trait (`SheetStore`, `TicketGateway`,
//! `TicketStore`) so the logic here can be exercised without Discord or Google.

pub mod sheets;
pub mod staff;
pub mod ticket;
pub mod verification;
