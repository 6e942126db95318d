//! Ticket factory for creating test ticket rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets with customizable fields.
///
/// ```rust,ignore
/// use test_utils::factory::ticket::TicketFactory;
///
/// let ticket = TicketFactory::new(&db)
///     .creator_id(42)
///     .last_creator_message_at(Utc::now() - chrono::Duration::hours(25))
///     .build()
///     .await?;
/// ```
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: u64,
    creator_id: u64,
    last_creator_message_at: DateTime<Utc>,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory with default values.
    ///
    /// Defaults:
    /// - channel_id / creator_id: unique generated snowflakes
    /// - last_creator_message_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            channel_id: next_id(),
            creator_id: next_id(),
            last_creator_message_at: Utc::now(),
        }
    }

    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn creator_id(mut self, creator_id: u64) -> Self {
        self.creator_id = creator_id;
        self
    }

    pub fn last_creator_message_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_creator_message_at = at;
        self
    }

    /// Inserts the ticket row.
    ///
    /// # Returns
    /// - `Ok(entity::ticket::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        let now = Utc::now();

        entity::ticket::ActiveModel {
            id: ActiveValue::NotSet,
            channel_id: ActiveValue::Set(self.channel_id.to_string()),
            creator_id: ActiveValue::Set(self.creator_id.to_string()),
            last_creator_message_at: ActiveValue::Set(self.last_creator_message_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket with default values.
pub async fn create_ticket(db: &DatabaseConnection) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db).build().await
}
