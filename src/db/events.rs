use sqlx::PgPool;

use crate::models::event::{Card, CardRequest, CardWithPlayer, Goal, GoalRequest, GoalWithScorer};

pub async fn list_goals(pool: &PgPool, match_id: i64) -> Result<Vec<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE match_id = $1 ORDER BY minute, id")
        .bind(match_id)
        .fetch_all(pool)
        .await
}

pub async fn get_goal(pool: &PgPool, match_id: i64, goal_id: i64) -> Result<Option<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE id = $1 AND match_id = $2")
        .bind(goal_id)
        .bind(match_id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_goal(pool: &PgPool, match_id: i64, request: &GoalRequest) -> Result<Goal, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        INSERT INTO goals (match_id, scorer_id, team_id, minute)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(request.scorer_id)
    .bind(request.team_id)
    .bind(request.minute)
    .fetch_one(pool)
    .await
}

pub async fn update_goal(
    pool: &PgPool,
    match_id: i64,
    goal_id: i64,
    request: &GoalRequest,
) -> Result<Option<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        UPDATE goals SET scorer_id = $3, team_id = $4, minute = $5
        WHERE id = $1 AND match_id = $2
        RETURNING *
        "#,
    )
    .bind(goal_id)
    .bind(match_id)
    .bind(request.scorer_id)
    .bind(request.team_id)
    .bind(request.minute)
    .fetch_optional(pool)
    .await
}

pub async fn delete_goal(pool: &PgPool, match_id: i64, goal_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND match_id = $2")
        .bind(goal_id)
        .bind(match_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Goals credited to one side of a match, in minute order
pub async fn list_goals_with_scorer(
    pool: &PgPool,
    match_id: i64,
    team_id: i64,
) -> Result<Vec<GoalWithScorer>, sqlx::Error> {
    sqlx::query_as::<_, GoalWithScorer>(
        r#"
        SELECT g.id, g.scorer_id, p.name AS scorer_name, g.team_id, g.minute
        FROM goals g
        JOIN players p ON p.id = g.scorer_id
        WHERE g.match_id = $1 AND g.team_id = $2
        ORDER BY g.minute, g.id
        "#,
    )
    .bind(match_id)
    .bind(team_id)
    .fetch_all(pool)
    .await
}

pub async fn list_cards(pool: &PgPool, match_id: i64) -> Result<Vec<Card>, sqlx::Error> {
    sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE match_id = $1 ORDER BY minute, id")
        .bind(match_id)
        .fetch_all(pool)
        .await
}

pub async fn insert_card(pool: &PgPool, match_id: i64, request: &CardRequest) -> Result<Card, sqlx::Error> {
    sqlx::query_as::<_, Card>(
        r#"
        INSERT INTO cards (match_id, player_id, card_type, minute, reason)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(request.player_id)
    .bind(request.card_type)
    .bind(request.minute)
    .bind(&request.reason)
    .fetch_one(pool)
    .await
}

pub async fn update_card(
    pool: &PgPool,
    match_id: i64,
    card_id: i64,
    request: &CardRequest,
) -> Result<Option<Card>, sqlx::Error> {
    sqlx::query_as::<_, Card>(
        r#"
        UPDATE cards SET player_id = $3, card_type = $4, minute = $5, reason = $6
        WHERE id = $1 AND match_id = $2
        RETURNING *
        "#,
    )
    .bind(card_id)
    .bind(match_id)
    .bind(request.player_id)
    .bind(request.card_type)
    .bind(request.minute)
    .bind(&request.reason)
    .fetch_optional(pool)
    .await
}

pub async fn delete_card(pool: &PgPool, match_id: i64, card_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cards WHERE id = $1 AND match_id = $2")
        .bind(card_id)
        .bind(match_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// All cards of a match with the booked player's team, in minute order
pub async fn list_cards_with_player(
    pool: &PgPool,
    match_id: i64,
) -> Result<Vec<CardWithPlayer>, sqlx::Error> {
    sqlx::query_as::<_, CardWithPlayer>(
        r#"
        SELECT
            c.id, c.player_id, p.name AS player_name,
            t.id AS team_id, t.name AS team_name,
            c.card_type, c.minute, c.reason
        FROM cards c
        JOIN players p ON p.id = c.player_id
        JOIN teams t ON t.id = p.team_id
        WHERE c.match_id = $1
        ORDER BY c.minute, c.id
        "#,
    )
    .bind(match_id)
    .fetch_all(pool)
    .await
}

/// Matches in which a player has scored, used before the player is deleted
pub async fn list_match_ids_scored_by(pool: &PgPool, player_id: i64) -> Result<Vec<i64>, sqlx::Error> {
    let rows: Vec<(i64,)> = sqlx::query_as("SELECT DISTINCT match_id FROM goals WHERE scorer_id = $1")
        .bind(player_id)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|(id,)| id).collect())
}
