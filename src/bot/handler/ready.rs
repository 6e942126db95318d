//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the handshake. Slash commands are registered
//! here so the global command set always matches the running build.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Overwrites the global command set. A registration failure is logged and the bot keeps
/// running with whatever commands Discord already has.
///
/// # Arguments
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::commands()).await {
        Ok(commands) => tracing::info!("Registered {} application commands", commands.len()),
        Err(e) => tracing::error!("Failed to register application commands: {}", e),
    }
}
