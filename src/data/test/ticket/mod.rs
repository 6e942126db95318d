use crate::{
    data::ticket::{DatabaseTicketStore, TicketRepository, TicketStore},
    error::AppError,
    model::ticket::Ticket,
};
use chrono::{DateTime, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::ticket::TicketFactory};

mod database_store;
mod get_all;
mod get_by_channel_id;
mod upsert;

/// Whole-second timestamp so values survive the SQLite round trip unchanged.
fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap()
}
