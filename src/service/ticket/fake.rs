//! In-memory `TicketGateway` for tracker tests.

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::gateway::TicketGateway;
use crate::{
    error::AppError,
    model::{
        member::MemberProfile,
        ticket::{ChannelMessage, TicketChannel},
    },
};

pub const GUILD_ID: u64 = 900;
pub const CATEGORY_ID: u64 = 500;

#[derive(Default)]
pub struct FakeGateway {
    /// `None` behaves like a missing ticket category.
    pub channels: Option<Vec<TicketChannel>>,
    history: Mutex<HashMap<u64, Vec<ChannelMessage>>>,
    members: HashMap<u64, MemberProfile>,
    /// Channels whose history fetches fail.
    pub failing_channels: HashSet<u64>,
    /// Channels that reject outgoing messages.
    pub failing_sends: HashSet<u64>,
    sent: Mutex<Vec<(u64, String)>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            channels: Some(Vec::new()),
            ..Default::default()
        }
    }

    pub fn with_channel(mut self, channel_id: u64, name: &str) -> Self {
        self.channels
            .get_or_insert_with(Vec::new)
            .push(TicketChannel {
                guild_id: GUILD_ID,
                channel_id,
                name: name.to_string(),
            });
        self
    }

    pub fn with_member(mut self, user_id: u64, is_administrator: bool, roles: &[&str]) -> Self {
        self.members.insert(
            user_id,
            MemberProfile {
                user_id,
                is_administrator,
                role_names: roles.iter().map(|role| role.to_string()).collect(),
            },
        );
        self
    }

    pub fn post(
        &self,
        channel_id: u64,
        author_id: u64,
        author_is_bot: bool,
        sent_at: DateTime<Utc>,
    ) {
        self.history
            .lock()
            .unwrap()
            .entry(channel_id)
            .or_default()
            .push(ChannelMessage {
                author_id,
                author_is_bot,
                sent_at,
            });
    }

    pub fn sent(&self) -> Vec<(u64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl<'a> TicketGateway for &'a FakeGateway {
    async fn category_channels(&self) -> Result<Option<Vec<TicketChannel>>, AppError> {
        Ok(self.channels.clone())
    }

    async fn recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        if self.failing_channels.contains(&channel_id) {
            return Err(AppError::NotFound(format!("Unknown channel {}", channel_id)));
        }

        let mut messages = self
            .history
            .lock()
            .unwrap()
            .get(&channel_id)
            .cloned()
            .unwrap_or_default();

        messages.sort_by_key(|message| std::cmp::Reverse(message.sent_at));
        messages.truncate(limit as usize);

        Ok(messages)
    }

    async fn member(&self, _guild_id: u64, user_id: u64) -> Result<MemberProfile, AppError> {
        self.members
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Unknown member {}", user_id)))
    }

    async fn send_message(&self, channel_id: u64, content: String) -> Result<(), AppError> {
        if self.failing_sends.contains(&channel_id) {
            return Err(AppError::NotFound(format!("Cannot send to channel {}", channel_id)));
        }

        self.sent.lock().unwrap().push((channel_id, content));
        Ok(())
    }
}
