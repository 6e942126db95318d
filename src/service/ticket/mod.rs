//! Ticket inactivity tracking.
//!
//! The ticket map has exactly one owner: the `TicketTracker` task. The message observer and
//! the periodic sweep never touch the store themselves; they hold a cloneable
//! `TicketTrackerHandle` and send it `TrackerMessage`s, which the tracker applies one at a
//! time. Interleaving between the two writers is therefore decided by channel order alone.
//!
//! - `gateway` - Discord access the tracker needs (channel listing, history, members)
//! - `observer` - Reacts to new messages in ticket channels
//! - `sweep` - Hourly discovery and reminder pass

pub mod gateway;
pub mod observer;
pub mod sweep;

#[cfg(test)]
mod fake;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot};

use crate::{data::ticket::TicketStore, error::AppError, model::ticket::Ticket, util::clock::Clock};

const TRACKER_CHANNEL_BUFFER: usize = 64;

type Reply<T> = oneshot::Sender<Result<T, AppError>>;

/// How a message from a non-staff author changed the ticket map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerUpdate {
    /// Channel was untracked; the author is now its creator.
    Created,
    /// Author is the tracked creator; activity moved to now.
    Refreshed,
    /// Author is a second non-staff participant. Their messages neither become the
    /// creator nor count as creator activity.
    Unchanged,
}

/// Messages accepted by the tracker task.
#[derive(Debug)]
enum TrackerMessage {
    /// A non-staff member posted in a ticket channel.
    Observe {
        channel_id: u64,
        author_id: u64,
        sent_at: DateTime<Utc>,
        reply: Reply<TrackerUpdate>,
    },

    Get {
        channel_id: u64,
        reply: Reply<Option<Ticket>>,
    },

    /// Record a creator found by scanning history, unless the channel became tracked in the
    /// meantime. Replies with whichever record ends up stored.
    Adopt { ticket: Ticket, reply: Reply<Ticket> },

    /// A reminder was sent at `at`; restart the idle window from there.
    Reminded {
        channel_id: u64,
        at: DateTime<Utc>,
        reply: Reply<()>,
    },

    List { reply: Reply<Vec<Ticket>> },
}

/// Single owner of the ticket store.
pub struct TicketTracker {
    store: Box<dyn TicketStore>,
    clock: Arc<dyn Clock>,
    rx: mpsc::Receiver<TrackerMessage>,
}

impl TicketTracker {
    /// Spawns the tracker task and returns a handle to it.
    ///
    /// The task runs until every handle has been dropped.
    ///
    /// # Arguments
    /// - `store` - Storage the tracker takes exclusive ownership of
    /// - `clock` - Time source for creator activity refreshes
    pub fn spawn(store: Box<dyn TicketStore>, clock: Arc<dyn Clock>) -> TicketTrackerHandle {
        let (tx, rx) = mpsc::channel(TRACKER_CHANNEL_BUFFER);

        let tracker = Self { store, clock, rx };
        tokio::spawn(tracker.run());

        TicketTrackerHandle { tx }
    }

    async fn run(mut self) {
        while let Some(message) = self.rx.recv().await {
            self.handle(message).await;
        }

        tracing::info!("Ticket tracker stopped");
    }

    async fn handle(&mut self, message: TrackerMessage) {
        // A dropped reply receiver only means the requester gave up waiting.
        match message {
            TrackerMessage::Observe {
                channel_id,
                author_id,
                sent_at,
                reply,
            } => {
                let _ = reply.send(self.observe(channel_id, author_id, sent_at).await);
            }
            TrackerMessage::Get { channel_id, reply } => {
                let _ = reply.send(self.store.get(channel_id).await);
            }
            TrackerMessage::Adopt { ticket, reply } => {
                let _ = reply.send(self.adopt(ticket).await);
            }
            TrackerMessage::Reminded {
                channel_id,
                at,
                reply,
            } => {
                let _ = reply.send(self.reminded(channel_id, at).await);
            }
            TrackerMessage::List { reply } => {
                let _ = reply.send(self.store.all().await);
            }
        }
    }

    async fn observe(
        &mut self,
        channel_id: u64,
        author_id: u64,
        sent_at: DateTime<Utc>,
    ) -> Result<TrackerUpdate, AppError> {
        match self.store.get(channel_id).await? {
            None => {
                self.store
                    .set(Ticket::new(channel_id, author_id, sent_at))
                    .await?;

                tracing::info!(
                    "Tracking ticket channel {} opened by {}",
                    channel_id,
                    author_id
                );

                Ok(TrackerUpdate::Created)
            }
            Some(mut ticket) if ticket.creator_id == author_id => {
                ticket.last_creator_activity = self.clock.now();
                self.store.set(ticket).await?;

                Ok(TrackerUpdate::Refreshed)
            }
            Some(_) => Ok(TrackerUpdate::Unchanged),
        }
    }

    async fn adopt(&mut self, ticket: Ticket) -> Result<Ticket, AppError> {
        if let Some(existing) = self.store.get(ticket.channel_id).await? {
            return Ok(existing);
        }

        self.store.set(ticket.clone()).await?;

        tracing::info!(
            "Discovered creator {} for ticket channel {}",
            ticket.creator_id,
            ticket.channel_id
        );

        Ok(ticket)
    }

    async fn reminded(&mut self, channel_id: u64, at: DateTime<Utc>) -> Result<(), AppError> {
        let Some(mut ticket) = self.store.get(channel_id).await? else {
            return Err(AppError::NotFound(format!(
                "Ticket channel {} is not tracked",
                channel_id
            )));
        };

        ticket.last_creator_activity = at;
        self.store.set(ticket).await
    }
}

/// Cloneable sender side of the tracker task.
#[derive(Debug, Clone)]
pub struct TicketTrackerHandle {
    tx: mpsc::Sender<TrackerMessage>,
}

impl TicketTrackerHandle {
    async fn request<T>(
        &self,
        message: impl FnOnce(Reply<T>) -> TrackerMessage,
    ) -> Result<T, AppError> {
        let (reply, response) = oneshot::channel();

        self.tx
            .send(message(reply))
            .await
            .map_err(|_| AppError::TrackerUnavailable)?;

        response.await.map_err(|_| AppError::TrackerUnavailable)?
    }

    /// Records a message from a non-staff author in a ticket channel.
    ///
    /// Untracked channels adopt the author as creator with `sent_at` as their last activity.
    /// A message from the tracked creator refreshes their activity to now. Anyone else leaves
    /// the record untouched.
    pub async fn observe(
        &self,
        channel_id: u64,
        author_id: u64,
        sent_at: DateTime<Utc>,
    ) -> Result<TrackerUpdate, AppError> {
        self.request(|reply| TrackerMessage::Observe {
            channel_id,
            author_id,
            sent_at,
            reply,
        })
        .await
    }

    pub async fn get(&self, channel_id: u64) -> Result<Option<Ticket>, AppError> {
        self.request(|reply| TrackerMessage::Get { channel_id, reply })
            .await
    }

    /// Stores a discovered ticket unless the channel is already tracked.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The record now stored for the channel, which is the existing one if
    ///   the observer got there first
    pub async fn adopt(&self, ticket: Ticket) -> Result<Ticket, AppError> {
        self.request(|reply| TrackerMessage::Adopt { ticket, reply })
            .await
    }

    /// Resets a ticket's idle window after a reminder.
    ///
    /// # Returns
    /// - `Ok(())` - Activity timestamp set to `at`
    /// - `Err(AppError::NotFound)` - Channel is not tracked
    pub async fn mark_reminded(&self, channel_id: u64, at: DateTime<Utc>) -> Result<(), AppError> {
        self.request(|reply| TrackerMessage::Reminded {
            channel_id,
            at,
            reply,
        })
        .await
    }

    pub async fn list(&self) -> Result<Vec<Ticket>, AppError> {
        self.request(|reply| TrackerMessage::List { reply }).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::{data::ticket::MemoryTicketStore, util::clock::ManualClock};

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    fn tracker(clock: &Arc<ManualClock>) -> TicketTrackerHandle {
        TicketTracker::spawn(Box::new(MemoryTicketStore::new()), clock.clone())
    }

    /// Tests that the first observed author becomes the creator exactly once.
    ///
    /// Verifies that later first-time messages in other channels do not touch the record.
    ///
    /// Expected: Created for each new channel, records keep their own creator and time
    #[tokio::test]
    async fn first_author_becomes_creator_once() -> Result<(), AppError> {
        let clock = Arc::new(ManualClock::new(at(1_000)));
        let tracker = tracker(&clock);

        assert_eq!(tracker.observe(1, 10, at(100)).await?, TrackerUpdate::Created);
        assert_eq!(tracker.observe(2, 20, at(200)).await?, TrackerUpdate::Created);

        assert_eq!(tracker.get(1).await?, Some(Ticket::new(1, 10, at(100))));
        assert_eq!(tracker.get(2).await?, Some(Ticket::new(2, 20, at(200))));
        assert_eq!(tracker.list().await?.len(), 2);

        Ok(())
    }

    /// Tests that a creator message refreshes activity to the current time.
    ///
    /// Expected: Refreshed with activity equal to the clock, not the message time
    #[tokio::test]
    async fn creator_message_refreshes_activity() -> Result<(), AppError> {
        let clock = Arc::new(ManualClock::new(at(1_000)));
        let tracker = tracker(&clock);

        tracker.observe(1, 10, at(100)).await?;
        clock.advance(Duration::hours(3));

        let update = tracker.observe(1, 10, at(500)).await?;

        assert_eq!(update, TrackerUpdate::Refreshed);
        assert_eq!(
            tracker.get(1).await?.unwrap().last_creator_activity,
            at(1_000) + Duration::hours(3)
        );

        Ok(())
    }

    /// Tests that a second non-staff participant is a no-op.
    ///
    /// Expected: Unchanged, creator and activity untouched
    #[tokio::test]
    async fn other_participant_leaves_record_unchanged() -> Result<(), AppError> {
        let clock = Arc::new(ManualClock::new(at(1_000)));
        let tracker = tracker(&clock);

        tracker.observe(1, 10, at(100)).await?;
        let update = tracker.observe(1, 99, at(900)).await?;

        assert_eq!(update, TrackerUpdate::Unchanged);
        assert_eq!(tracker.get(1).await?, Some(Ticket::new(1, 10, at(100))));

        Ok(())
    }

    /// Tests that adopting a discovered creator never overwrites an existing record.
    ///
    /// Expected: the observer's record is returned and kept
    #[tokio::test]
    async fn adopt_keeps_existing_record() -> Result<(), AppError> {
        let clock = Arc::new(ManualClock::new(at(1_000)));
        let tracker = tracker(&clock);

        tracker.observe(1, 10, at(100)).await?;
        let adopted = tracker.adopt(Ticket::new(1, 77, at(50))).await?;

        assert_eq!(adopted, Ticket::new(1, 10, at(100)));
        assert_eq!(tracker.get(1).await?, Some(Ticket::new(1, 10, at(100))));

        let fresh = tracker.adopt(Ticket::new(2, 77, at(50))).await?;
        assert_eq!(fresh, Ticket::new(2, 77, at(50)));

        Ok(())
    }

    /// Tests resetting the idle window after a reminder.
    ///
    /// Expected: Ok for tracked channels, NotFound for untracked ones
    #[tokio::test]
    async fn mark_reminded_resets_activity() -> Result<(), AppError> {
        let clock = Arc::new(ManualClock::new(at(1_000)));
        let tracker = tracker(&clock);

        tracker.observe(1, 10, at(100)).await?;
        tracker.mark_reminded(1, at(90_000)).await?;

        assert_eq!(
            tracker.get(1).await?.unwrap().last_creator_activity,
            at(90_000)
        );
        assert!(matches!(
            tracker.mark_reminded(2, at(90_000)).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
