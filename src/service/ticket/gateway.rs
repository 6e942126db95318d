//! Discord access used by the ticket tracker.
//!
//! `TicketGateway` is the seam between tracking logic and Discord. The live implementation
//! reads channel listings from the serenity cache and goes to the HTTP API for history,
//! members and sending reminders.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use serenity::all::{
    Cache, ChannelId, ChannelType, CreateMessage, GetMessages, GuildId, Http, Message, Role,
    RoleId, UserId,
};

use crate::{
    error::AppError,
    model::{
        member::MemberProfile,
        ticket::{ChannelMessage, TicketChannel},
    },
};

#[async_trait]
pub trait TicketGateway: Send + Sync {
    /// Lists text channels directly under the ticket category of the first cached guild.
    ///
    /// # Returns
    /// - `Ok(Some(channels))` - Category found; may be empty
    /// - `Ok(None)` - No guild cached yet, or the category is missing or not a category
    async fn category_channels(&self) -> Result<Option<Vec<TicketChannel>>, AppError>;

    /// Fetches up to `limit` of the most recent messages in a channel, newest first.
    async fn recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError>;

    /// Resolves a guild member's administrator status and role names.
    async fn member(&self, guild_id: u64, user_id: u64) -> Result<MemberProfile, AppError>;

    async fn send_message(&self, channel_id: u64, content: String) -> Result<(), AppError>;
}

/// Gateway backed by a connected serenity client.
#[derive(Clone)]
pub struct SerenityTicketGateway {
    cache: Arc<Cache>,
    http: Arc<Http>,
    category_id: u64,
}

impl SerenityTicketGateway {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>, category_id: u64) -> Self {
        Self {
            cache,
            http,
            category_id,
        }
    }
}

#[async_trait]
impl TicketGateway for SerenityTicketGateway {
    async fn category_channels(&self) -> Result<Option<Vec<TicketChannel>>, AppError> {
        let Some(guild_id) = self.cache.guilds().into_iter().next() else {
            tracing::debug!("No guild cached yet");
            return Ok(None);
        };

        let Some(guild) = self.cache.guild(guild_id) else {
            return Ok(None);
        };

        let category_id = ChannelId::new(self.category_id);
        match guild.channels.get(&category_id) {
            Some(category) if category.kind == ChannelType::Category => {}
            _ => {
                tracing::warn!(
                    "Ticket category {} not found in guild {}",
                    category_id,
                    guild_id
                );
                return Ok(None);
            }
        }

        let channels = guild
            .channels
            .values()
            .filter(|channel| channel.parent_id == Some(category_id))
            .filter(|channel| is_text_capable(channel.kind))
            .map(|channel| TicketChannel {
                guild_id: guild_id.get(),
                channel_id: channel.id.get(),
                name: channel.name.clone(),
            })
            .collect();

        Ok(Some(channels))
    }

    async fn recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        let messages = ChannelId::new(channel_id)
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages.iter().map(channel_message).collect())
    }

    async fn member(&self, guild_id: u64, user_id: u64) -> Result<MemberProfile, AppError> {
        let guild_id = GuildId::new(guild_id);
        let user_id = UserId::new(user_id);

        let member = guild_id
            .member((&self.cache, self.http.as_ref()), user_id)
            .await?;

        let cached = self
            .cache
            .guild(guild_id)
            .map(|guild| (guild.owner_id, guild.roles.clone()));

        let (owner_id, roles) = match cached {
            Some(cached) => cached,
            None => {
                let guild = guild_id.to_partial_guild(&self.http).await?;
                (guild.owner_id, guild.roles)
            }
        };

        Ok(member_profile(
            guild_id,
            owner_id,
            user_id,
            &member.roles,
            &roles,
        ))
    }

    async fn send_message(&self, channel_id: u64, content: String) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }
}

fn is_text_capable(kind: ChannelType) -> bool {
    matches!(
        kind,
        ChannelType::Text | ChannelType::News | ChannelType::Voice | ChannelType::Stage
    )
}

fn channel_message(message: &Message) -> ChannelMessage {
    ChannelMessage {
        author_id: message.author.id.get(),
        author_is_bot: message.author.bot,
        sent_at: message.timestamp.to_utc(),
    }
}

/// Reduces a member to the facts the staff policy looks at.
///
/// A member counts as an administrator when they own the guild, or when `@everyone` or any
/// role they hold grants the administrator permission. Roles missing from `roles` are
/// ignored.
pub fn member_profile(
    guild_id: GuildId,
    owner_id: UserId,
    user_id: UserId,
    member_roles: &[RoleId],
    roles: &HashMap<RoleId, Role>,
) -> MemberProfile {
    let held: Vec<&Role> = member_roles
        .iter()
        .filter_map(|role_id| roles.get(role_id))
        .collect();

    let everyone_is_admin = roles
        .get(&guild_id.everyone_role())
        .is_some_and(|role| role.permissions.administrator());

    let is_administrator = user_id == owner_id
        || everyone_is_admin
        || held.iter().any(|role| role.permissions.administrator());

    MemberProfile {
        user_id: user_id.get(),
        is_administrator,
        role_names: held.iter().map(|role| role.name.clone()).collect(),
    }
}
