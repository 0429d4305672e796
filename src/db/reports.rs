use sqlx::PgPool;

use crate::models::report::{MatchReport, MatchReportRequest};

pub async fn get_report(pool: &PgPool, match_id: i64) -> Result<Option<MatchReport>, sqlx::Error> {
    sqlx::query_as::<_, MatchReport>("SELECT * FROM match_reports WHERE match_id = $1")
        .bind(match_id)
        .fetch_optional(pool)
        .await
}

/// A match has at most one report; writing again replaces it
pub async fn upsert_report(
    pool: &PgPool,
    match_id: i64,
    request: &MatchReportRequest,
) -> Result<MatchReport, sqlx::Error> {
    sqlx::query_as::<_, MatchReport>(
        r#"
        INSERT INTO match_reports (match_id, general_report, referee_rating, is_verified)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (match_id) DO UPDATE SET
            general_report = EXCLUDED.general_report,
            referee_rating = EXCLUDED.referee_rating,
            is_verified = EXCLUDED.is_verified
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(&request.general_report)
    .bind(request.referee_rating)
    .bind(request.is_verified)
    .fetch_one(pool)
    .await
}
