use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::config::fixtures::FixtureSettings;
use crate::db::helpers::db_result;
use crate::db::teams;
use crate::league::league::LeagueService;
use crate::ok_or_return;

/// All registered teams, alphabetically
pub async fn get_all_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let all_teams = ok_or_return!(db_result(teams::list_teams_by_name(pool.get_ref()).await));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "title": "All Teams in the League",
        "data": all_teams
    })))
}

/// Roster with goal and card tallies
pub async fn get_team_roster(
    team_slug: String,
    pool: web::Data<PgPool>,
    settings: web::Data<FixtureSettings>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    match league_service.get_roster(&team_slug).await {
        Ok(Some(roster)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "title": format!("{} Roster", roster.team.name),
            "data": roster
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Team not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to get roster for {}: {}", team_slug, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve roster"
            })))
        }
    }
}
