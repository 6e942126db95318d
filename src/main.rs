mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::Config,
    error::AppError,
    model::{ticket::TicketSettings, verification::SheetLayout},
    service::{
        sheets::GoogleSheetsClient, staff::RoleNameStaffPolicy, ticket::TicketTracker,
        verification::VerificationService,
    },
    state::BotState,
    util::clock::{Clock, SystemClock},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = startup::build_ticket_store(&config).await?;
    let tracker = TicketTracker::spawn(store, clock.clone());
    tracing::info!("Tracking {} ticket channels", tracker.list().await?.len());

    let http_client = startup::setup_reqwest_client()?;
    let sheets = GoogleSheetsClient::new(
        http_client,
        config.sheet_id.clone(),
        config.service_account_file.clone(),
    )?;

    let state = BotState {
        tracker,
        ticket_settings: TicketSettings::from_config(&config),
        staff_policy: RoleNameStaffPolicy::new(config.staff_roles.clone()),
        verification: Arc::new(VerificationService::new(sheets, SheetLayout::default())),
        clock,
    };

    let client = bot::start::init_bot(&config, state.clone()).await?;

    let _scheduler = scheduler::ticket_sweep::start_scheduler(
        &state,
        client.cache.clone(),
        client.http.clone(),
    )
    .await?;

    bot::start::start_bot(client).await
}
