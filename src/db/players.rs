use sqlx::PgPool;

use crate::models::player::{Player, PlayerRequest, RosterEntry, TopScorer};

pub async fn list_players(pool: &PgPool, team_id: Option<i64>) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"
        SELECT * FROM players
        WHERE ($1::BIGINT IS NULL OR team_id = $1)
        ORDER BY team_id, jersey_number
        "#,
    )
    .bind(team_id)
    .fetch_all(pool)
    .await
}

pub async fn get_player(pool: &PgPool, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1")
        .bind(player_id)
        .fetch_optional(pool)
        .await
}

/// Jersey numbers and id numbers are unique league-wide
pub async fn find_conflicting_player(
    pool: &PgPool,
    jersey_number: i32,
    id_number: Option<&str>,
    exclude_id: Option<i64>,
) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"
        SELECT * FROM players
        WHERE (jersey_number = $1 OR ($2::TEXT IS NOT NULL AND id_number = $2))
          AND ($3::BIGINT IS NULL OR id <> $3)
        LIMIT 1
        "#,
    )
    .bind(jersey_number)
    .bind(id_number)
    .bind(exclude_id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_player(pool: &PgPool, request: &PlayerRequest) -> Result<Player, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (team_id, name, jersey_number, id_number)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(request.team_id)
    .bind(request.name.trim())
    .bind(request.jersey_number)
    .bind(&request.id_number)
    .fetch_one(pool)
    .await
}

pub async fn update_player(
    pool: &PgPool,
    player_id: i64,
    request: &PlayerRequest,
) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"
        UPDATE players
        SET team_id = $2, name = $3, jersey_number = $4, id_number = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(player_id)
    .bind(request.team_id)
    .bind(request.name.trim())
    .bind(request.jersey_number)
    .bind(&request.id_number)
    .fetch_optional(pool)
    .await
}

pub async fn delete_player(pool: &PgPool, player_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(player_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Players of one team with goal and card tallies, by jersey number
pub async fn get_roster(pool: &PgPool, team_id: i64) -> Result<Vec<RosterEntry>, sqlx::Error> {
    sqlx::query_as::<_, RosterEntry>(
        r#"
        SELECT
            p.id,
            p.name,
            p.jersey_number,
            p.id_number,
            (SELECT COUNT(*) FROM goals g WHERE g.scorer_id = p.id) AS total_goals,
            (SELECT COUNT(*) FROM cards c WHERE c.player_id = p.id AND c.card_type = 'Y') AS yellow_cards,
            (SELECT COUNT(*) FROM cards c WHERE c.player_id = p.id AND c.card_type IN ('R', '2Y')) AS red_cards
        FROM players p
        WHERE p.team_id = $1
        ORDER BY p.jersey_number
        "#,
    )
    .bind(team_id)
    .fetch_all(pool)
    .await
}

/// Players with at least one goal, most goals first, then by name
pub async fn get_top_scorers(pool: &PgPool, limit: i64) -> Result<Vec<TopScorer>, sqlx::Error> {
    sqlx::query_as::<_, TopScorer>(
        r#"
        SELECT
            p.id AS player_id,
            p.name,
            t.name AS team_name,
            COUNT(g.id) AS goals_count
        FROM players p
        JOIN teams t ON t.id = p.team_id
        JOIN goals g ON g.scorer_id = p.id
        GROUP BY p.id, p.name, t.name
        HAVING COUNT(g.id) > 0
        ORDER BY goals_count DESC, p.name ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
