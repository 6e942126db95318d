use serenity::all::{Context, Interaction};

use crate::{bot::command::verify, state::BotState};

/// Dispatches slash commands by name.
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let result = match command.data.name.as_str() {
        verify::NAME => verify::run(&ctx, &command, &state.verification).await,
        other => {
            tracing::warn!("Received unknown command {}", other);
            return;
        }
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle command {}: {}", command.data.name, e);
    }
}
