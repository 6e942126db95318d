use crate::{
    error::AppError,
    model::ticket::{IncomingMessage, TicketSettings},
    service::staff::StaffPolicy,
};

use super::{gateway::TicketGateway, TicketTrackerHandle, TrackerUpdate};

/// What the observer did with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Direct message or bot author.
    Skipped,
    /// Not a ticket channel.
    NotTicket,
    /// Author's member profile could not be resolved.
    MemberUnavailable,
    Staff,
    Tracked(TrackerUpdate),
}

/// Feeds new messages in ticket channels to the tracker.
pub struct TicketObserver<P> {
    settings: TicketSettings,
    policy: P,
    tracker: TicketTrackerHandle,
}

impl<P: StaffPolicy> TicketObserver<P> {
    pub fn new(settings: TicketSettings, policy: P, tracker: TicketTrackerHandle) -> Self {
        Self {
            settings,
            policy,
            tracker,
        }
    }

    /// Handles one inbound message.
    ///
    /// Messages outside guilds, from bots, outside ticket channels, or from staff are
    /// skipped. If the author's member profile cannot be resolved the message is dropped
    /// without touching the tracker.
    ///
    /// # Arguments
    /// - `gateway` - Used to resolve the author's member profile
    /// - `message` - The delivered message
    ///
    /// # Returns
    /// - `Ok(Observation)` - What happened to the message
    /// - `Err(AppError)` - The tracker failed to record it
    pub async fn observe<G: TicketGateway>(
        &self,
        gateway: &G,
        message: IncomingMessage,
    ) -> Result<Observation, AppError> {
        let Some(guild_id) = message.guild_id else {
            return Ok(Observation::Skipped);
        };
        if message.author_is_bot {
            return Ok(Observation::Skipped);
        }

        if !self
            .settings
            .is_ticket_channel(message.parent_id, &message.channel_name)
        {
            return Ok(Observation::NotTicket);
        }

        let member = match gateway.member(guild_id, message.author_id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::debug!(
                    "Could not resolve member {} in ticket channel {}: {}",
                    message.author_id,
                    message.channel_id,
                    e
                );
                return Ok(Observation::MemberUnavailable);
            }
        };

        if self.policy.is_staff(&member) {
            return Ok(Observation::Staff);
        }

        let update = self
            .tracker
            .observe(message.channel_id, message.author_id, message.sent_at)
            .await?;

        Ok(Observation::Tracked(update))
    }
}
