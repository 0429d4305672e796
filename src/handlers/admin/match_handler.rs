use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::db::helpers::{db_result, require_affected, require_record, validated, DbResult};
use crate::db::{matches, referees, teams};
use crate::league::scoring::refresh_match_score;
use crate::models::matches::{MatchFilter, MatchListItem, MatchRequest};
use crate::ok_or_return;

// GET /admin/matches
pub async fn get_matches(
    pool: web::Data<PgPool>,
    query: web::Query<MatchFilter>,
) -> Result<HttpResponse> {
    tracing::debug!("Listing matches with filter {}", query);
    let rows = ok_or_return!(db_result(
        matches::list_matches_with_teams(pool.get_ref(), &query).await
    ));
    let items: Vec<MatchListItem> = rows.into_iter().map(MatchListItem::from).collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": items
    })))
}

// GET /admin/matches/{id}
pub async fn get_match_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let game = ok_or_return!(require_record(
        matches::get_match_with_teams(pool.get_ref(), path.into_inner()).await,
        "Match not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": MatchListItem::from(game)
    })))
}

// POST /admin/matches
pub async fn create_match(
    pool: web::Data<PgPool>,
    body: web::Json<MatchRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    ok_or_return!(validated(request.validate()));
    ok_or_return!(check_references(pool.get_ref(), &request).await);

    let game = ok_or_return!(db_result(
        matches::insert_match(pool.get_ref(), &request.into_new_match()).await
    ));
    tracing::info!("Created match {}", game.id);

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": game
    })))
}

// PUT /admin/matches/{id}
pub async fn update_match(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    body: web::Json<MatchRequest>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    let request = body.into_inner();
    ok_or_return!(validated(request.validate()));
    ok_or_return!(check_references(pool.get_ref(), &request).await);

    let game = ok_or_return!(require_record(
        matches::update_match(pool.get_ref(), match_id, &request).await,
        "Match not found"
    ));

    // Teams may have changed, so goals credited to them may count differently now
    let game = ok_or_return!(db_result(refresh_match_score(pool.get_ref(), &game).await));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": game
    })))
}

// DELETE /admin/matches/{id}
pub async fn delete_match(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    ok_or_return!(require_affected(
        matches::delete_match(pool.get_ref(), path.into_inner()).await,
        "Match not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Match deleted"
    })))
}

async fn check_references(pool: &PgPool, request: &MatchRequest) -> DbResult<()> {
    require_record(teams::get_team(pool, request.home_team_id).await, "Home team not found")?;
    require_record(teams::get_team(pool, request.away_team_id).await, "Away team not found")?;
    if let Some(referee_id) = request.referee_id {
        require_record(referees::get_referee(pool, referee_id).await, "Referee not found")?;
    }
    Ok(())
}
