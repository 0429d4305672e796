use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::db::helpers::{db_result, require_affected, require_record, validated};
use crate::db::{events, matches, players};
use crate::league::scoring::refresh_match_score;
use crate::league::validation::LeagueValidator;
use crate::models::event::{CardRequest, GoalRequest};
use crate::ok_or_return;

// GET /admin/matches/{id}/goals
pub async fn get_goals(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let goals = ok_or_return!(db_result(events::list_goals(pool.get_ref(), path.into_inner()).await));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": goals
    })))
}

// POST /admin/matches/{id}/goals
pub async fn create_goal(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    body: web::Json<GoalRequest>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    let request = body.into_inner();

    let game = ok_or_return!(require_record(matches::get_match(pool.get_ref(), match_id).await, "Match not found"));
    ok_or_return!(require_record(players::get_player(pool.get_ref(), request.scorer_id).await, "Scorer not found"));
    ok_or_return!(validated(LeagueValidator::new().validate_goal(&game, &request)));

    let goal = ok_or_return!(db_result(events::insert_goal(pool.get_ref(), match_id, &request).await));
    let game = ok_or_return!(db_result(refresh_match_score(pool.get_ref(), &game).await));

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": {
            "goal": goal,
            "match": game
        }
    })))
}

// PUT /admin/matches/{id}/goals/{goal_id}
pub async fn update_goal(
    pool: web::Data<PgPool>,
    path: web::Path<(i64, i64)>,
    body: web::Json<GoalRequest>,
) -> Result<HttpResponse> {
    let (match_id, goal_id) = path.into_inner();
    let request = body.into_inner();

    let game = ok_or_return!(require_record(matches::get_match(pool.get_ref(), match_id).await, "Match not found"));
    ok_or_return!(require_record(players::get_player(pool.get_ref(), request.scorer_id).await, "Scorer not found"));
    ok_or_return!(validated(LeagueValidator::new().validate_goal(&game, &request)));

    let goal = ok_or_return!(require_record(
        events::update_goal(pool.get_ref(), match_id, goal_id, &request).await,
        "Goal not found"
    ));
    let game = ok_or_return!(db_result(refresh_match_score(pool.get_ref(), &game).await));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "goal": goal,
            "match": game
        }
    })))
}

// DELETE /admin/matches/{id}/goals/{goal_id}
pub async fn delete_goal(
    pool: web::Data<PgPool>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let (match_id, goal_id) = path.into_inner();

    let game = ok_or_return!(require_record(matches::get_match(pool.get_ref(), match_id).await, "Match not found"));
    ok_or_return!(require_affected(
        events::delete_goal(pool.get_ref(), match_id, goal_id).await,
        "Goal not found"
    ));
    let game = ok_or_return!(db_result(refresh_match_score(pool.get_ref(), &game).await));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "match": game
        }
    })))
}

// GET /admin/matches/{id}/cards
pub async fn get_cards(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let cards = ok_or_return!(db_result(events::list_cards(pool.get_ref(), path.into_inner()).await));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": cards
    })))
}

// POST /admin/matches/{id}/cards
pub async fn create_card(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    body: web::Json<CardRequest>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    let request = body.into_inner();

    let game = ok_or_return!(require_record(matches::get_match(pool.get_ref(), match_id).await, "Match not found"));
    let player = ok_or_return!(require_record(players::get_player(pool.get_ref(), request.player_id).await, "Player not found"));
    ok_or_return!(validated(LeagueValidator::new().validate_card(&game, &player, &request)));

    let card = ok_or_return!(db_result(events::insert_card(pool.get_ref(), match_id, &request).await));
    tracing::info!("{} for {} in match {}", card.card_type, player.name, match_id);

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": card
    })))
}

// PUT /admin/matches/{id}/cards/{card_id}
pub async fn update_card(
    pool: web::Data<PgPool>,
    path: web::Path<(i64, i64)>,
    body: web::Json<CardRequest>,
) -> Result<HttpResponse> {
    let (match_id, card_id) = path.into_inner();
    let request = body.into_inner();

    let game = ok_or_return!(require_record(matches::get_match(pool.get_ref(), match_id).await, "Match not found"));
    let player = ok_or_return!(require_record(players::get_player(pool.get_ref(), request.player_id).await, "Player not found"));
    ok_or_return!(validated(LeagueValidator::new().validate_card(&game, &player, &request)));

    let card = ok_or_return!(require_record(
        events::update_card(pool.get_ref(), match_id, card_id, &request).await,
        "Card not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": card
    })))
}

// DELETE /admin/matches/{id}/cards/{card_id}
pub async fn delete_card(
    pool: web::Data<PgPool>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let (match_id, card_id) = path.into_inner();
    ok_or_return!(require_affected(
        events::delete_card(pool.get_ref(), match_id, card_id).await,
        "Card not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Card deleted"
    })))
}
