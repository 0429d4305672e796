//! Generates a full double round-robin for every registered team.
//!
//! Matches are saved one by one, starting tomorrow at local midnight.

use chrono::Local;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use std::process::ExitCode;

use league_manager::config::settings::get_config;
use league_manager::league::league::LeagueService;
use league_manager::league::schedule::{tomorrow_midnight, FixtureError};
use league_manager::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match get_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read the config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let subscriber = get_subscriber(
        "generate_fixtures".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    let start = match tomorrow_midnight(&Local::now()) {
        Ok(start) => start,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        "Start date set to {} (local), match days separated by {} days",
        start.format("%Y-%m-%d %z"),
        config.fixtures.days_between_rounds
    );

    let pool = match PgPoolOptions::new()
        .max_connections(1)
        .connect(config.database.connection_string().expose_secret())
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to Postgres: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let league_service = LeagueService::new(pool.clone(), config.fixtures.clone());
    let result = league_service.generate_fixtures(start).await;
    pool.close().await;

    match result {
        Ok(summary) => {
            tracing::info!(
                "Successfully created {} fixtures ({} first leg, {} return leg)",
                summary.saved,
                summary.first_leg_matches,
                summary.return_leg_matches
            );
            ExitCode::SUCCESS
        }
        Err(e @ FixtureError::NotEnoughTeams(_)) => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("Critical save error: {}", e);
            ExitCode::FAILURE
        }
    }
}
