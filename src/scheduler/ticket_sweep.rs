use std::{sync::Arc, time::Duration};

use serenity::all::{Cache, Http};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::ticket::TicketSettings,
    service::{
        staff::RoleNameStaffPolicy,
        ticket::{gateway::SerenityTicketGateway, sweep::TicketSweep, TicketTrackerHandle},
    },
    state::BotState,
    util::clock::Clock,
};

const SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// What each sweep run needs; cloned into the job closure.
#[derive(Clone)]
struct SweepResources {
    cache: Arc<Cache>,
    http: Arc<Http>,
    settings: TicketSettings,
    policy: RoleNameStaffPolicy,
    tracker: TicketTrackerHandle,
    clock: Arc<dyn Clock>,
}

/// Starts the ticket sweep scheduler
///
/// The first sweep runs one interval after startup, giving the gateway time to populate the
/// guild cache the sweep reads channels from.
///
/// # Arguments
/// - `state`: Shared bot state with the tracker handle and ticket settings
/// - `cache`: Discord cache of the running client
/// - `http`: Discord HTTP client of the running client
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; keep it alive for the life of the process
/// - `Err(AppError::SchedulerErr)` - Job could not be created or the scheduler failed to start
pub async fn start_scheduler(
    state: &BotState,
    cache: Arc<Cache>,
    http: Arc<Http>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let resources = SweepResources {
        cache,
        http,
        settings: state.ticket_settings.clone(),
        policy: state.staff_policy.clone(),
        tracker: state.tracker.clone(),
        clock: state.clock.clone(),
    };

    let job = Job::new_repeated_async(SWEEP_INTERVAL, move |_uuid, _lock| {
        let resources = resources.clone();

        Box::pin(async move {
            run_sweep(resources).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Ticket sweep scheduler started");

    Ok(scheduler)
}

async fn run_sweep(resources: SweepResources) {
    let gateway = SerenityTicketGateway::new(
        resources.cache,
        resources.http,
        resources.settings.category_id,
    );
    let sweep = TicketSweep::new(
        gateway,
        resources.settings,
        resources.policy,
        resources.tracker,
        resources.clock,
    );

    match sweep.run().await {
        Ok(report) => tracing::info!(
            "Ticket sweep finished: {} checked, {} discovered, {} reminded, {} failed",
            report.checked,
            report.discovered,
            report.reminded,
            report.failed
        ),
        Err(e) => tracing::error!("Error running ticket sweep: {}", e),
    }
}
