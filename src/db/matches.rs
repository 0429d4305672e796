use sqlx::PgPool;

use crate::models::matches::{is_played_from_scores, Match, MatchFilter, MatchRequest, MatchWithTeams, NewMatch};

const MATCH_WITH_TEAMS_SELECT: &str = r#"
    SELECT
        m.*,
        ht.name AS home_team_name,
        at.name AS away_team_name,
        r.name AS referee_name
    FROM matches m
    JOIN teams ht ON ht.id = m.home_team_id
    JOIN teams at ON at.id = m.away_team_id
    LEFT JOIN referees r ON r.id = m.referee_id
"#;

pub async fn list_matches_with_teams(
    pool: &PgPool,
    filter: &MatchFilter,
) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
    let sql = format!(
        r#"{}
        WHERE ($1::BOOLEAN IS NULL OR m.is_played = $1)
          AND ($2::BIGINT IS NULL OR m.home_team_id = $2 OR m.away_team_id = $2)
          AND ($3::BIGINT IS NULL OR m.referee_id = $3)
        ORDER BY m.match_date, m.id
        "#,
        MATCH_WITH_TEAMS_SELECT
    );

    sqlx::query_as::<_, MatchWithTeams>(&sql)
        .bind(filter.is_played)
        .bind(filter.team_id)
        .bind(filter.referee_id)
        .fetch_all(pool)
        .await
}

pub async fn get_match_with_teams(
    pool: &PgPool,
    match_id: i64,
) -> Result<Option<MatchWithTeams>, sqlx::Error> {
    let sql = format!("{} WHERE m.id = $1", MATCH_WITH_TEAMS_SELECT);
    sqlx::query_as::<_, MatchWithTeams>(&sql)
        .bind(match_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_match(pool: &PgPool, match_id: i64) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_played_matches(pool: &PgPool) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE is_played = TRUE ORDER BY match_date, id")
        .fetch_all(pool)
        .await
}

pub async fn count_matches(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM matches")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Insert a fresh match; new matches have no goals, so they start unplayed at 0-0
pub async fn insert_match(pool: &PgPool, new_match: &NewMatch) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches (
            home_team_id, away_team_id, match_date, venue, referee_id,
            home_score, away_score, is_played
        ) VALUES ($1, $2, $3, $4, $5, 0, 0, FALSE)
        RETURNING *
        "#,
    )
    .bind(new_match.home_team_id)
    .bind(new_match.away_team_id)
    .bind(new_match.match_date)
    .bind(&new_match.venue)
    .bind(new_match.referee_id)
    .fetch_one(pool)
    .await
}

pub async fn update_match(
    pool: &PgPool,
    match_id: i64,
    request: &MatchRequest,
) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET home_team_id = $2,
            away_team_id = $3,
            match_date = COALESCE($4, match_date),
            venue = $5,
            referee_id = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(request.home_team_id)
    .bind(request.away_team_id)
    .bind(request.match_date)
    .bind(&request.venue)
    .bind(request.referee_id)
    .fetch_optional(pool)
    .await
}

/// Write recomputed scores; the played flag always follows the scores
pub async fn update_match_scores(
    pool: &PgPool,
    match_id: i64,
    home_score: i32,
    away_score: i32,
) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET home_score = $2, away_score = $3, is_played = $4
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(home_score)
    .bind(away_score)
    .bind(is_played_from_scores(home_score, away_score))
    .fetch_one(pool)
    .await
}

pub async fn delete_match(pool: &PgPool, match_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(match_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
