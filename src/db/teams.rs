use sqlx::PgPool;

use crate::models::team::{Team, TeamRequest};

/// Teams in primary-key order, the seeding order for fixture generation
pub async fn list_teams_by_id(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn list_teams_by_name(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn get_team(pool: &PgPool, team_id: i64) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_team_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await
}

/// Another team already using this name or slug
pub async fn find_conflicting_team(
    pool: &PgPool,
    name: &str,
    slug: &str,
    exclude_id: Option<i64>,
) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"
        SELECT * FROM teams
        WHERE (LOWER(name) = LOWER($1) OR slug = $2)
          AND ($3::BIGINT IS NULL OR id <> $3)
        LIMIT 1
        "#,
    )
    .bind(name)
    .bind(slug)
    .bind(exclude_id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_team(pool: &PgPool, request: &TeamRequest) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (name, slug, contact_person, contact_number)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(request.name.trim())
    .bind(request.resolved_slug())
    .bind(&request.contact_person)
    .bind(&request.contact_number)
    .fetch_one(pool)
    .await
}

pub async fn update_team(
    pool: &PgPool,
    team_id: i64,
    request: &TeamRequest,
) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"
        UPDATE teams
        SET name = $2, slug = $3, contact_person = $4, contact_number = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(team_id)
    .bind(request.name.trim())
    .bind(request.resolved_slug())
    .bind(&request.contact_person)
    .bind(&request.contact_number)
    .fetch_optional(pool)
    .await
}

pub async fn delete_team(pool: &PgPool, team_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(team_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
