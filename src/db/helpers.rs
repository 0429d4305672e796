//! Database query helpers that turn `sqlx` results into JSON error responses.
//!
//! For handlers returning `Result<HttpResponse>`:
//! ```ignore
//! let team = ok_or_return!(require_record(get_team(pool, id).await, "Team not found"));
//! ```

use actix_web::HttpResponse;
use serde_json::json;

/// Macro for handlers returning `Result<HttpResponse>`.
/// Converts a `DbResult<T>` to return `Ok(error_response)` on error.
#[macro_export]
macro_rules! ok_or_return {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(response) => return Ok(response),
        }
    };
}

/// Result type for database operations that return an HttpResponse on error
pub type DbResult<T> = Result<T, HttpResponse>;

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    not_found_message: &str,
) -> DbResult<T> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": not_found_message
        }))),
        Err(e) => Err(database_error(e)),
    }
}

/// Ensure a record does NOT exist, returning Conflict if it does.
pub fn ensure_not_exists<T>(
    result: Result<Option<T>, sqlx::Error>,
    conflict_message: &str,
) -> DbResult<()> {
    match result {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(json!({
            "success": false,
            "message": conflict_message
        }))),
        Ok(None) => Ok(()),
        Err(e) => Err(database_error(e)),
    }
}

/// Unwrap a database result, returning InternalServerError on error.
pub fn db_result<T>(result: Result<T, sqlx::Error>) -> DbResult<T> {
    result.map_err(database_error)
}

/// Treat zero affected rows as NotFound.
pub fn require_affected(result: Result<u64, sqlx::Error>, not_found_message: &str) -> DbResult<()> {
    match result {
        Ok(0) => Err(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": not_found_message
        }))),
        Ok(_) => Ok(()),
        Err(e) => Err(database_error(e)),
    }
}

/// Reject a request whose payload failed validation.
pub fn validated(result: Result<(), String>) -> DbResult<()> {
    result.map_err(|message| {
        HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": message
        }))
    })
}

// Postgres SQLSTATE codes the schema can raise on bad input
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

fn database_error(e: sqlx::Error) -> HttpResponse {
    let code = e
        .as_database_error()
        .and_then(|db_error| db_error.code())
        .map(|code| code.into_owned());

    match code.as_deref() {
        Some(UNIQUE_VIOLATION) => {
            tracing::warn!("Unique constraint rejected write: {}", e);
            HttpResponse::Conflict().json(json!({
                "success": false,
                "message": "A record with the same unique value already exists"
            }))
        }
        Some(FOREIGN_KEY_VIOLATION) | Some(CHECK_VIOLATION) => {
            tracing::warn!("Constraint rejected write: {}", e);
            HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Request violates a league constraint"
            }))
        }
        _ => {
            tracing::error!("Database error: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Database error"
            }))
        }
    }
}
