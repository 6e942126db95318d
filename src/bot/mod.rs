//! Discord bot integration.
//!
//! The bot reacts to three gateway events: `ready` (register slash commands), `message`
//! (feed ticket activity to the tracker) and `interaction_create` (run slash commands).
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel data for the cache the sweep reads from
//! - `GUILD_MESSAGES` - Message events in ticket channels
//! - `GUILD_MEMBERS` - Member lookups for the staff check (privileged intent)
//! - `MESSAGE_CONTENT` - Message events in channels the bot is not mentioned in (privileged
//!   intent)
//!
//! Both privileged intents must be enabled in the Discord Developer Portal.

pub mod command;
pub mod handler;
pub mod start;
