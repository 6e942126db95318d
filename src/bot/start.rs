use serenity::all::{ApplicationId, Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::BotState};

/// Builds the Discord client without connecting.
///
/// The client is returned so its cache and HTTP handles can be shared with the sweep
/// scheduler before `start_bot` takes ownership of it.
///
/// # Arguments
/// - `config` - Bot token and application ID
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(config: &Config, state: BotState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&config.discord_token, intents)
        .application_id(ApplicationId::new(config.discord_client_id))
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Connects to the gateway and processes events until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
