use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::db::helpers::{db_result, require_affected, require_record, validated};
use crate::db::referees;
use crate::models::referee::RefereeRequest;
use crate::ok_or_return;

// GET /admin/referees
pub async fn get_referees(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let all_referees = ok_or_return!(db_result(referees::list_referees(pool.get_ref()).await));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": all_referees
    })))
}

// GET /admin/referees/{id}
pub async fn get_referee_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let referee = ok_or_return!(require_record(
        referees::get_referee(pool.get_ref(), path.into_inner()).await,
        "Referee not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": referee
    })))
}

// POST /admin/referees
pub async fn create_referee(
    pool: web::Data<PgPool>,
    body: web::Json<RefereeRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    ok_or_return!(validated(request.validate()));

    let referee = ok_or_return!(db_result(referees::insert_referee(pool.get_ref(), &request).await));

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": referee
    })))
}

// PUT /admin/referees/{id}
pub async fn update_referee(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    body: web::Json<RefereeRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    ok_or_return!(validated(request.validate()));

    let referee = ok_or_return!(require_record(
        referees::update_referee(pool.get_ref(), path.into_inner(), &request).await,
        "Referee not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": referee
    })))
}

// DELETE /admin/referees/{id}
pub async fn delete_referee(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    // Matches keep existing, their referee is cleared
    ok_or_return!(require_affected(
        referees::delete_referee(pool.get_ref(), path.into_inner()).await,
        "Referee not found"
    ));

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Referee deleted"
    })))
}
