// src/models/report.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchReport {
    pub id: i64,
    pub match_id: i64,
    pub general_report: Option<String>,
    pub referee_rating: i32,
    pub is_verified: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchReportRequest {
    pub general_report: Option<String>,
    #[serde(default = "default_referee_rating")]
    pub referee_rating: i32,
    #[serde(default)]
    pub is_verified: bool,
}

fn default_referee_rating() -> i32 {
    5
}

impl MatchReportRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=10).contains(&self.referee_rating) {
            return Err("Referee rating must be between 1 and 10".to_string());
        }
        Ok(())
    }
}
