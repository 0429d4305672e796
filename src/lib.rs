use actix_web::{web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;

pub mod config;
mod routes;
mod handlers;
pub mod models;
pub mod db;
pub mod league;
pub mod telemetry;
use crate::routes::init_routes;
use crate::config::fixtures::FixtureSettings;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    fixture_settings: FixtureSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let fixture_settings = web::Data::new(fixture_settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(fixture_settings.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
