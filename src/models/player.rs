// src/models/player.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: i64,
    pub team_id: i64,
    pub name: String,
    pub jersey_number: i32,
    pub id_number: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerRequest {
    pub team_id: i64,
    pub name: String,
    pub jersey_number: i32,
    pub id_number: Option<String>,
}

impl PlayerRequest {
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Player name cannot be empty".to_string());
        }
        if name.chars().count() > 100 {
            return Err("Player name cannot exceed 100 characters".to_string());
        }
        if self.jersey_number <= 0 {
            return Err("Jersey number must be positive".to_string());
        }
        if let Some(id_number) = &self.id_number {
            if id_number.chars().count() > 20 {
                return Err("ID number cannot exceed 20 characters".to_string());
            }
        }
        Ok(())
    }
}

/// One line of a team roster with per-player tallies
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct RosterEntry {
    pub id: i64,
    pub name: String,
    pub jersey_number: i32,
    pub id_number: Option<String>,
    pub total_goals: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TopScorer {
    pub player_id: i64,
    pub name: String,
    pub team_name: String,
    pub goals_count: i64,
}
