use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::db::helpers::{db_result, require_record, validated};
use crate::db::{matches, reports};
use crate::models::report::MatchReportRequest;
use crate::ok_or_return;

// GET /admin/matches/{id}/report
pub async fn get_report(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let report = ok_or_return!(require_record(
        reports::get_report(pool.get_ref(), path.into_inner()).await,
        "Match report not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": report
    })))
}

// PUT /admin/matches/{id}/report
pub async fn upsert_report(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    body: web::Json<MatchReportRequest>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    let request = body.into_inner();
    ok_or_return!(validated(request.validate()));
    ok_or_return!(require_record(matches::get_match(pool.get_ref(), match_id).await, "Match not found"));

    let report = ok_or_return!(db_result(reports::upsert_report(pool.get_ref(), match_id, &request).await));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": report
    })))
}
