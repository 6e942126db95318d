//! Slash commands.
//!
//! Each command module exposes a `NAME`, a `register()` builder used when the command set is
//! overwritten on ready, and a `run()` entry point the interaction handler dispatches to.

pub mod verify;

use serenity::all::CreateCommand;

/// Every command the bot registers.
pub fn commands() -> Vec<CreateCommand> {
    vec![verify::register()]
}
