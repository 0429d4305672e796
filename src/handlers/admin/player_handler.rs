use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::db::helpers::{db_result, ensure_not_exists, require_affected, require_record, validated};
use crate::db::{events, matches, players, teams};
use crate::league::scoring::refresh_match_score;
use crate::models::player::PlayerRequest;
use crate::ok_or_return;

#[derive(Deserialize)]
pub struct PlayerQueryParams {
    pub team_id: Option<i64>,
}

// GET /admin/players
pub async fn get_players(
    pool: web::Data<PgPool>,
    query: web::Query<PlayerQueryParams>,
) -> Result<HttpResponse> {
    let all_players = ok_or_return!(db_result(players::list_players(pool.get_ref(), query.team_id).await));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": all_players
    })))
}

// GET /admin/players/{id}
pub async fn get_player_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let player = ok_or_return!(require_record(
        players::get_player(pool.get_ref(), path.into_inner()).await,
        "Player not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": player
    })))
}

// POST /admin/players
pub async fn create_player(
    pool: web::Data<PgPool>,
    body: web::Json<PlayerRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    ok_or_return!(validated(request.validate()));
    ok_or_return!(require_record(
        teams::get_team(pool.get_ref(), request.team_id).await,
        "Team not found"
    ));
    ok_or_return!(ensure_not_exists(
        players::find_conflicting_player(
            pool.get_ref(),
            request.jersey_number,
            request.id_number.as_deref(),
            None
        )
        .await,
        "Jersey number or ID number already registered"
    ));

    let player = ok_or_return!(db_result(players::insert_player(pool.get_ref(), &request).await));

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": player
    })))
}

// PUT /admin/players/{id}
pub async fn update_player(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    body: web::Json<PlayerRequest>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();
    let request = body.into_inner();
    ok_or_return!(validated(request.validate()));
    ok_or_return!(require_record(
        teams::get_team(pool.get_ref(), request.team_id).await,
        "Team not found"
    ));
    ok_or_return!(ensure_not_exists(
        players::find_conflicting_player(
            pool.get_ref(),
            request.jersey_number,
            request.id_number.as_deref(),
            Some(player_id)
        )
        .await,
        "Jersey number or ID number already registered"
    ));

    let player = ok_or_return!(require_record(
        players::update_player(pool.get_ref(), player_id, &request).await,
        "Player not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": player
    })))
}

// DELETE /admin/players/{id}
pub async fn delete_player(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();
    // Their goals go with them, so the affected scores have to be recomputed
    let affected_matches = ok_or_return!(db_result(
        events::list_match_ids_scored_by(pool.get_ref(), player_id).await
    ));

    ok_or_return!(require_affected(
        players::delete_player(pool.get_ref(), player_id).await,
        "Player not found"
    ));

    for match_id in affected_matches {
        if let Some(game) = ok_or_return!(db_result(matches::get_match(pool.get_ref(), match_id).await)) {
            ok_or_return!(db_result(refresh_match_score(pool.get_ref(), &game).await));
        }
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Player deleted"
    })))
}
