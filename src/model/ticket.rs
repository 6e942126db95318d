//! Domain models for ticket channel tracking.
//!
//! A ticket is a text channel under the configured ticket category whose name carries the
//! ticket prefix. The tracker remembers who opened each ticket and when they last spoke, and
//! the sweep uses that to nudge creators who have gone quiet.

use chrono::{DateTime, Duration, Utc};
use serenity::all::{Mentionable, UserId};

use crate::{config::Config, error::AppError, util::parse::parse_u64_from_string};

/// How long a creator may stay silent before being reminded.
pub const IDLE_THRESHOLD_HOURS: i64 = 24;

/// How many recent messages are scanned when reconstructing an untracked ticket.
pub const DISCOVERY_WINDOW: u8 = 20;

/// Tracked state of one ticket channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Discord channel ID of the ticket.
    pub channel_id: u64,
    /// Discord user ID of the first non-staff participant.
    pub creator_id: u64,
    /// When the creator last posted, or when they were last reminded.
    pub last_creator_activity: DateTime<Utc>,
}

impl Ticket {
    pub fn new(channel_id: u64, creator_id: u64, last_creator_activity: DateTime<Utc>) -> Self {
        Self {
            channel_id,
            creator_id,
            last_creator_activity,
        }
    }

    /// Converts an entity model to a ticket domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The converted ticket
    /// - `Err(AppError::InternalErr)` - Stored channel or creator ID is not a valid u64
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, AppError> {
        Ok(Self {
            channel_id: parse_u64_from_string(entity.channel_id)?,
            creator_id: parse_u64_from_string(entity.creator_id)?,
            last_creator_activity: entity.last_creator_message_at,
        })
    }

    /// Whether at least `threshold` has elapsed since the last creator activity.
    pub fn is_idle(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        now - self.last_creator_activity >= threshold
    }
}

/// Builds the reminder posted into an idle ticket.
pub fn reminder_content(creator_id: u64) -> String {
    format!(
        "{} It’s been 24h since your last reply. Would you still like to verify? \
         Please note this ticket will close if you do not reply",
        UserId::new(creator_id).mention()
    )
}

/// Rules for recognising ticket channels and judging inactivity.
#[derive(Debug, Clone)]
pub struct TicketSettings {
    /// Category channel that ticket channels are created under.
    pub category_id: u64,
    /// Name prefix every ticket channel carries.
    pub name_prefix: String,
    pub idle_threshold: Duration,
    pub discovery_window: u8,
}

impl TicketSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            category_id: config.ticket_category_id,
            name_prefix: config.ticket_prefix.clone(),
            idle_threshold: Duration::hours(IDLE_THRESHOLD_HOURS),
            discovery_window: DISCOVERY_WINDOW,
        }
    }

    pub fn is_ticket_name(&self, name: &str) -> bool {
        name.starts_with(&self.name_prefix)
    }

    /// A ticket channel is a direct child of the ticket category with a ticket name.
    pub fn is_ticket_channel(&self, parent_id: Option<u64>, name: &str) -> bool {
        parent_id == Some(self.category_id) && self.is_ticket_name(name)
    }
}

/// A text channel under the ticket category, as listed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketChannel {
    pub guild_id: u64,
    pub channel_id: u64,
    pub name: String,
}

/// A message read back from channel history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub author_id: u64,
    pub author_is_bot: bool,
    pub sent_at: DateTime<Utc>,
}

/// A freshly delivered message event, reduced to what the observer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    /// Category the channel sits under, if any.
    pub parent_id: Option<u64>,
    pub channel_name: String,
    pub author_id: u64,
    pub author_is_bot: bool,
    pub sent_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TicketSettings {
        TicketSettings {
            category_id: 500,
            name_prefix: "ticket-".to_string(),
            idle_threshold: Duration::hours(IDLE_THRESHOLD_HOURS),
            discovery_window: DISCOVERY_WINDOW,
        }
    }

    /// Tests ticket channel recognition by parent and name.
    ///
    /// Expected: only prefixed channels directly under the category qualify
    #[test]
    fn recognises_ticket_channels() {
        let settings = settings();

        assert!(settings.is_ticket_channel(Some(500), "ticket-0042"));
        assert!(!settings.is_ticket_channel(Some(501), "ticket-0042"));
        assert!(!settings.is_ticket_channel(None, "ticket-0042"));
        assert!(!settings.is_ticket_channel(Some(500), "general"));
        assert!(!settings.is_ticket_channel(Some(500), "closed-ticket-0042"));
    }

    /// Tests the idle check at and around the threshold.
    ///
    /// Expected: idle exactly at 24h and beyond, not before
    #[test]
    fn idle_threshold_is_inclusive() {
        let now = Utc::now();
        let threshold = Duration::hours(24);

        let at = Ticket::new(1, 2, now - Duration::hours(24));
        let before = Ticket::new(1, 2, now - Duration::hours(24) + Duration::seconds(1));
        let after = Ticket::new(1, 2, now - Duration::hours(25));

        assert!(at.is_idle(now, threshold));
        assert!(!before.is_idle(now, threshold));
        assert!(after.is_idle(now, threshold));
    }

    /// Tests the reminder text mentions the creator.
    ///
    /// Expected: content begins with the creator mention
    #[test]
    fn reminder_mentions_creator() {
        let content = reminder_content(123456789);

        assert!(content.starts_with("<@123456789> It’s been 24h since your last reply."));
    }
}
