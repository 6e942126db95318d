//! Ticket stores and the ticket repository.
//!
//! `TicketStore` is the get/set/iterate seam the ticket tracker is written against.
//! `MemoryTicketStore` keeps records in a `HashMap` for the process lifetime, while
//! `DatabaseTicketStore` delegates to `TicketRepository` for durable storage.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{error::AppError, model::ticket::Ticket};

/// Keyed storage for ticket records, at most one per channel.
///
/// Implementations are owned by the tracker task, so mutation takes `&mut self` and no
/// internal locking is needed.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Returns the record for a channel, if tracked.
    async fn get(&self, channel_id: u64) -> Result<Option<Ticket>, AppError>;

    /// Inserts or replaces the record for `ticket.channel_id`.
    async fn set(&mut self, ticket: Ticket) -> Result<(), AppError>;

    /// Returns every tracked record.
    async fn all(&self) -> Result<Vec<Ticket>, AppError>;
}

/// Process-lifetime ticket storage.
#[derive(Debug, Default)]
pub struct MemoryTicketStore {
    tickets: HashMap<u64, Ticket>,
}

impl MemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketStore for MemoryTicketStore {
    async fn get(&self, channel_id: u64) -> Result<Option<Ticket>, AppError> {
        Ok(self.tickets.get(&channel_id).cloned())
    }

    async fn set(&mut self, ticket: Ticket) -> Result<(), AppError> {
        self.tickets.insert(ticket.channel_id, ticket);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Ticket>, AppError> {
        Ok(self.tickets.values().cloned().collect())
    }
}

/// Ticket storage backed by the `ticket` table.
pub struct DatabaseTicketStore {
    db: DatabaseConnection,
}

impl DatabaseTicketStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TicketStore for DatabaseTicketStore {
    async fn get(&self, channel_id: u64) -> Result<Option<Ticket>, AppError> {
        TicketRepository::new(&self.db)
            .get_by_channel_id(channel_id)
            .await
    }

    async fn set(&mut self, ticket: Ticket) -> Result<(), AppError> {
        TicketRepository::new(&self.db).upsert(&ticket).await?;
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Ticket>, AppError> {
        TicketRepository::new(&self.db).get_all().await
    }
}

/// Repository providing database operations for ticket records.
///
/// Discord IDs are stored as strings and converted back to `u64` at this boundary.
pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    /// Creates a new TicketRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the ticket record for a channel.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID of the ticket
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))` - Ticket tracked for the channel
    /// - `Ok(None)` - Channel is not tracked
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - Stored IDs are not valid snowflakes
    pub async fn get_by_channel_id(&self, channel_id: u64) -> Result<Option<Ticket>, AppError> {
        let entity = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(Ticket::from_entity).transpose()
    }

    /// Creates or updates the record for a ticket channel.
    ///
    /// Existing rows keep their `created_at`; creator and activity timestamp are replaced.
    ///
    /// # Arguments
    /// - `ticket` - Ticket state to store
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The stored ticket
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(&self, ticket: &Ticket) -> Result<Ticket, AppError> {
        let existing = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ChannelId.eq(ticket.channel_id.to_string()))
            .one(self.db)
            .await?;

        let now = Utc::now();

        let entity = match existing {
            Some(existing) => {
                let mut active: entity::ticket::ActiveModel = existing.into();
                active.creator_id = ActiveValue::Set(ticket.creator_id.to_string());
                active.last_creator_message_at = ActiveValue::Set(ticket.last_creator_activity);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::ticket::ActiveModel {
                    id: ActiveValue::NotSet,
                    channel_id: ActiveValue::Set(ticket.channel_id.to_string()),
                    creator_id: ActiveValue::Set(ticket.creator_id.to_string()),
                    last_creator_message_at: ActiveValue::Set(ticket.last_creator_activity),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?
            }
        };

        Ticket::from_entity(entity)
    }

    /// Gets every tracked ticket, oldest record first.
    pub async fn get_all(&self) -> Result<Vec<Ticket>, AppError> {
        entity::prelude::Ticket::find()
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect()
    }
}
