use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::ticket::{DatabaseTicketStore, MemoryTicketStore, TicketStore},
    error::AppError,
};

const HTTP_TIMEOUT_SECS: u64 = 30;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `database_url` - SeaORM connection string, e.g. `sqlite://tickets.db?mode=rwc`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Picks the ticket store for the tracker.
///
/// Tickets persist to the database when `DATABASE_URL` is set; otherwise they are kept in
/// memory and rebuilt from channel history by the sweep after a restart.
pub async fn build_ticket_store(config: &Config) -> Result<Box<dyn TicketStore>, AppError> {
    match &config.database_url {
        Some(database_url) => {
            let db = connect_to_database(database_url).await?;
            tracing::info!("Persisting tracked tickets to the database");

            Ok(Box::new(DatabaseTicketStore::new(db)))
        }
        None => {
            tracing::info!("DATABASE_URL not set, tracking tickets in memory");

            Ok(Box::new(MemoryTicketStore::new()))
        }
    }
}

/// HTTP client for the Google Sheets API.
///
/// Redirects are not followed since the values endpoints never redirect.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .map_err(crate::error::sheets::SheetsError::from)?;

    Ok(client)
}
