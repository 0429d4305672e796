// src/models/referee.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Referee {
    pub id: i64,
    pub name: String,
    pub contact_number: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefereeRequest {
    pub name: String,
    pub contact_number: String,
}

impl RefereeRequest {
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Referee name cannot be empty".to_string());
        }
        if name.chars().count() > 100 {
            return Err("Referee name cannot exceed 100 characters".to_string());
        }
        if self.contact_number.chars().count() > 15 {
            return Err("Contact number cannot exceed 15 characters".to_string());
        }
        Ok(())
    }
}
