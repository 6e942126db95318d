use serenity::all::{Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;

use crate::{
    service::{staff::RoleNameStaffPolicy, ticket::observer::TicketObserver},
    state::BotState,
};

pub mod interaction;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
    pub observer: TicketObserver<RoleNameStaffPolicy>,
}

impl Handler {
    pub fn new(state: BotState) -> Self {
        let observer = TicketObserver::new(
            state.ticket_settings.clone(),
            state.staff_policy.clone(),
            state.tracker.clone(),
        );

        Self { state, observer }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, &self.observer, ctx, message).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.state, ctx, interaction).await;
    }
}
