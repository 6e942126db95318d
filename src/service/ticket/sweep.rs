//! Periodic reconciliation of ticket channels.
//!
//! Each pass walks the ticket category. Channels the tracker has never seen (for example
//! because the bot restarted) get their creator reconstructed from recent history. Tracked
//! tickets whose creator has been quiet past the idle threshold get a reminder, unless the
//! creator wrote the most recent message.

use std::{collections::HashSet, sync::Arc};

use crate::{
    error::AppError,
    model::ticket::{reminder_content, Ticket, TicketChannel, TicketSettings},
    service::staff::StaffPolicy,
    util::clock::Clock,
};

use super::{gateway::TicketGateway, TicketTrackerHandle};

/// Counts from one sweep pass, logged by the scheduler.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Ticket channels visited.
    pub checked: usize,
    /// Untracked channels whose creator was found in history.
    pub discovered: usize,
    pub reminded: usize,
    /// Channels skipped because a Discord or tracker call failed.
    pub failed: usize,
}

pub struct TicketSweep<G, P> {
    gateway: G,
    settings: TicketSettings,
    policy: P,
    tracker: TicketTrackerHandle,
    clock: Arc<dyn Clock>,
}

impl<G: TicketGateway, P: StaffPolicy> TicketSweep<G, P> {
    pub fn new(
        gateway: G,
        settings: TicketSettings,
        policy: P,
        tracker: TicketTrackerHandle,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            gateway,
            settings,
            policy,
            tracker,
            clock,
        }
    }

    /// Runs one pass over the ticket category.
    ///
    /// A missing category ends the pass without doing anything. Failures on a single
    /// channel are logged and counted, and the pass moves on to the next channel.
    pub async fn run(&self) -> Result<SweepReport, AppError> {
        let mut report = SweepReport::default();

        let Some(channels) = self.gateway.category_channels().await? else {
            return Ok(report);
        };

        for channel in channels
            .iter()
            .filter(|channel| self.settings.is_ticket_name(&channel.name))
        {
            report.checked += 1;

            if let Err(e) = self.sweep_channel(channel, &mut report).await {
                report.failed += 1;
                tracing::error!(
                    "Failed to check ticket channel {} ({}): {}",
                    channel.name,
                    channel.channel_id,
                    e
                );
            }
        }

        Ok(report)
    }

    async fn sweep_channel(
        &self,
        channel: &TicketChannel,
        report: &mut SweepReport,
    ) -> Result<(), AppError> {
        let ticket = match self.tracker.get(channel.channel_id).await? {
            Some(ticket) => ticket,
            None => match self.discover(channel).await? {
                Some(ticket) => {
                    report.discovered += 1;
                    ticket
                }
                None => {
                    tracing::debug!("No creator found in {} yet", channel.name);
                    return Ok(());
                }
            },
        };

        let now = self.clock.now();
        if !ticket.is_idle(now, self.settings.idle_threshold) {
            return Ok(());
        }

        // Only the newest message is checked; an older creator reply does not suppress.
        let latest = self
            .gateway
            .recent_messages(channel.channel_id, 1)
            .await?
            .into_iter()
            .max_by_key(|message| message.sent_at);

        match latest {
            Some(message) if message.author_id != ticket.creator_id => {}
            _ => return Ok(()),
        }

        self.gateway
            .send_message(channel.channel_id, reminder_content(ticket.creator_id))
            .await?;
        self.tracker.mark_reminded(channel.channel_id, now).await?;
        report.reminded += 1;

        tracing::info!(
            "Reminded {} in idle ticket {}",
            ticket.creator_id,
            channel.name
        );

        Ok(())
    }

    /// Finds the earliest non-bot, non-staff author in the discovery window and adopts them
    /// as creator.
    async fn discover(&self, channel: &TicketChannel) -> Result<Option<Ticket>, AppError> {
        let mut messages: Vec<_> = self
            .gateway
            .recent_messages(channel.channel_id, self.settings.discovery_window)
            .await?
            .into_iter()
            .filter(|message| !message.author_is_bot)
            .collect();
        messages.sort_by_key(|message| message.sent_at);

        let mut staff = HashSet::new();
        for message in messages {
            if staff.contains(&message.author_id) {
                continue;
            }

            let member = self
                .gateway
                .member(channel.guild_id, message.author_id)
                .await?;
            if self.policy.is_staff(&member) {
                staff.insert(message.author_id);
                continue;
            }

            let ticket = Ticket::new(channel.channel_id, message.author_id, message.sent_at);
            return self.tracker.adopt(ticket).await.map(Some);
        }

        Ok(None)
    }
}
