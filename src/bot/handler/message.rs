use serenity::all::{Channel, Context, Message};

use crate::{
    model::ticket::IncomingMessage,
    service::{
        staff::RoleNameStaffPolicy,
        ticket::{gateway::SerenityTicketGateway, observer::TicketObserver},
    },
    state::BotState,
};

/// Handle message creation in a channel
pub async fn handle_message(
    state: &BotState,
    observer: &TicketObserver<RoleNameStaffPolicy>,
    ctx: Context,
    message: Message,
) {
    // Only guild messages from people can be ticket activity
    if message.guild_id.is_none() || message.author.bot {
        return;
    }

    let channel = match message.channel_id.to_channel(&ctx).await {
        Ok(Channel::Guild(channel)) => channel,
        Ok(_) => return,
        Err(e) => {
            tracing::debug!("Failed to resolve channel {}: {}", message.channel_id, e);
            return;
        }
    };

    let incoming = IncomingMessage {
        guild_id: message.guild_id.map(|id| id.get()),
        channel_id: message.channel_id.get(),
        parent_id: channel.parent_id.map(|id| id.get()),
        channel_name: channel.name,
        author_id: message.author.id.get(),
        author_is_bot: message.author.bot,
        sent_at: message.timestamp.to_utc(),
    };

    let gateway = SerenityTicketGateway::new(
        ctx.cache.clone(),
        ctx.http.clone(),
        state.ticket_settings.category_id,
    );

    match observer.observe(&gateway, incoming).await {
        Ok(observation) => tracing::debug!(
            "Message {} in channel {}: {:?}",
            message.id,
            message.channel_id,
            observation
        ),
        Err(e) => tracing::error!(
            "Failed to record ticket activity in channel {}: {}",
            message.channel_id,
            e
        ),
    }
}
