use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::db::helpers::{db_result, ensure_not_exists, require_affected, require_record, validated};
use crate::db::teams;
use crate::models::team::TeamRequest;
use crate::ok_or_return;

// GET /admin/teams
pub async fn get_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let all_teams = ok_or_return!(db_result(teams::list_teams_by_name(pool.get_ref()).await));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": all_teams
    })))
}

// GET /admin/teams/{id}
pub async fn get_team_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    let team = ok_or_return!(require_record(
        teams::get_team(pool.get_ref(), team_id).await,
        "Team not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": team
    })))
}

// POST /admin/teams
pub async fn create_team(
    pool: web::Data<PgPool>,
    body: web::Json<TeamRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    ok_or_return!(validated(request.validate()));

    ok_or_return!(ensure_not_exists(
        teams::find_conflicting_team(pool.get_ref(), request.name.trim(), &request.resolved_slug(), None).await,
        "Team name or slug already taken"
    ));

    let team = ok_or_return!(db_result(teams::insert_team(pool.get_ref(), &request).await));
    tracing::info!("Created team {} ({})", team.name, team.id);

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": team
    })))
}

// PUT /admin/teams/{id}
pub async fn update_team(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    body: web::Json<TeamRequest>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    let request = body.into_inner();
    ok_or_return!(validated(request.validate()));

    ok_or_return!(ensure_not_exists(
        teams::find_conflicting_team(pool.get_ref(), request.name.trim(), &request.resolved_slug(), Some(team_id)).await,
        "Team name or slug already taken"
    ));

    let team = ok_or_return!(require_record(
        teams::update_team(pool.get_ref(), team_id, &request).await,
        "Team not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": team
    })))
}

// DELETE /admin/teams/{id}
pub async fn delete_team(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    ok_or_return!(require_affected(
        teams::delete_team(pool.get_ref(), team_id).await,
        "Team not found"
    ));
    tracing::info!("Deleted team {} with its players and matches", team_id);

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Team deleted"
    })))
}
