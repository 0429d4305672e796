// src/routes/league.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::config::fixtures::FixtureSettings;
use crate::handlers::league::{league_handler, team_handler};

/// League table and top scorers
#[get("/standings")]
async fn get_standings(
    pool: web::Data<PgPool>,
    settings: web::Data<FixtureSettings>,
) -> Result<HttpResponse> {
    league_handler::get_league_standings(pool, settings).await
}

/// Played and upcoming matches
#[get("/schedule")]
async fn get_schedule(
    pool: web::Data<PgPool>,
    settings: web::Data<FixtureSettings>,
) -> Result<HttpResponse> {
    league_handler::get_league_schedule(pool, settings).await
}

/// All teams
#[get("/teams")]
async fn get_teams(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    team_handler::get_all_teams(pool).await
}

/// Team roster by slug
#[get("/teams/{team_slug}")]
async fn get_roster(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    settings: web::Data<FixtureSettings>,
) -> Result<HttpResponse> {
    let team_slug = path.into_inner();
    team_handler::get_team_roster(team_slug, pool, settings).await
}

/// Match detail
#[get("/matches/{match_id}")]
async fn get_match_detail(
    path: web::Path<i64>,
    pool: web::Data<PgPool>,
    settings: web::Data<FixtureSettings>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    league_handler::get_match_detail(match_id, pool, settings).await
}
