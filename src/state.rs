//! State shared by the Discord event handlers and the sweep scheduler.
//!
//! Built once in `main` after configuration is loaded and the ticket tracker is spawned.
//! Every field is cheap to clone: the tracker handle wraps a channel sender and the
//! services sit behind `Arc`.

use std::sync::Arc;

use crate::{
    model::ticket::TicketSettings,
    service::{
        sheets::GoogleSheetsClient, staff::RoleNameStaffPolicy, ticket::TicketTrackerHandle,
        verification::VerificationService,
    },
    util::clock::Clock,
};

#[derive(Clone)]
pub struct BotState {
    /// Sender side of the ticket tracker task.
    pub tracker: TicketTrackerHandle,

    /// Ticket category, name prefix and inactivity thresholds.
    pub ticket_settings: TicketSettings,

    /// Decides which members are exempt from ticket tracking.
    pub staff_policy: RoleNameStaffPolicy,

    /// Backs the `verify` command.
    pub verification: Arc<VerificationService<GoogleSheetsClient>>,

    pub clock: Arc<dyn Clock>,
}
