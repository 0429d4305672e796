use actix_web::{web, HttpResponse, Result};
use chrono::Local;
use serde_json::json;
use sqlx::PgPool;

use crate::config::fixtures::FixtureSettings;
use crate::league::league::LeagueService;
use crate::league::schedule::{tomorrow_midnight, FixtureError};

// POST /admin/fixtures/generate
pub async fn generate_fixtures(
    pool: web::Data<PgPool>,
    settings: web::Data<FixtureSettings>,
) -> Result<HttpResponse> {
    let start_date = match tomorrow_midnight(&Local::now()) {
        Ok(start) => start,
        Err(e) => {
            tracing::error!("Failed to determine fixture start date: {}", e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": e.to_string()
            })));
        }
    };

    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    match league_service.generate_fixtures(start_date).await {
        Ok(summary) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": summary
        }))),
        Err(e @ FixtureError::NotEnoughTeams(_)) => {
            tracing::warn!("Fixture generation rejected: {}", e);
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": e.to_string()
            })))
        }
        Err(e) => {
            tracing::error!("Fixture generation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": e.to_string(),
                "saved": e.saved()
            })))
        }
    }
}
