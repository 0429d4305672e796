use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::config::fixtures::FixtureSettings;
use crate::league::league::LeagueService;

/// League table and top scorers
pub async fn get_league_standings(
    pool: web::Data<PgPool>,
    settings: web::Data<FixtureSettings>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    match league_service.get_standings_page().await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "title": "League Standings",
            "data": page
        }))),
        Err(e) => {
            tracing::error!("Failed to compute standings: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to compute standings"
            })))
        }
    }
}

/// Results and upcoming fixtures
pub async fn get_league_schedule(
    pool: web::Data<PgPool>,
    settings: web::Data<FixtureSettings>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    match league_service.get_schedule().await {
        Ok(schedule) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "title": "Match Schedule and Results",
            "data": schedule
        }))),
        Err(e) => {
            tracing::error!("Failed to get schedule: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve schedule"
            })))
        }
    }
}

/// Goals, cards and report for a single match
pub async fn get_match_detail(
    match_id: i64,
    pool: web::Data<PgPool>,
    settings: web::Data<FixtureSettings>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    match league_service.get_match_detail(match_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "title": detail.label.clone(),
            "data": detail
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Match not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to get match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve match"
            })))
        }
    }
}
