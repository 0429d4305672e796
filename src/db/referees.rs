use sqlx::PgPool;

use crate::models::referee::{Referee, RefereeRequest};

pub async fn list_referees(pool: &PgPool) -> Result<Vec<Referee>, sqlx::Error> {
    sqlx::query_as::<_, Referee>("SELECT * FROM referees ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn get_referee(pool: &PgPool, referee_id: i64) -> Result<Option<Referee>, sqlx::Error> {
    sqlx::query_as::<_, Referee>("SELECT * FROM referees WHERE id = $1")
        .bind(referee_id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_referee(pool: &PgPool, request: &RefereeRequest) -> Result<Referee, sqlx::Error> {
    sqlx::query_as::<_, Referee>(
        "INSERT INTO referees (name, contact_number) VALUES ($1, $2) RETURNING *",
    )
    .bind(request.name.trim())
    .bind(&request.contact_number)
    .fetch_one(pool)
    .await
}

pub async fn update_referee(
    pool: &PgPool,
    referee_id: i64,
    request: &RefereeRequest,
) -> Result<Option<Referee>, sqlx::Error> {
    sqlx::query_as::<_, Referee>(
        "UPDATE referees SET name = $2, contact_number = $3 WHERE id = $1 RETURNING *",
    )
    .bind(referee_id)
    .bind(request.name.trim())
    .bind(&request.contact_number)
    .fetch_optional(pool)
    .await
}

pub async fn delete_referee(pool: &PgPool, referee_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM referees WHERE id = $1")
        .bind(referee_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
