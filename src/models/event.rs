// src/models/event.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Latest minute accepted for a goal or card, stoppage time included
pub const MAX_EVENT_MINUTE: i32 = 130;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Goal {
    pub id: i64,
    pub match_id: i64,
    pub scorer_id: i64,
    pub team_id: i64,
    pub minute: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoalRequest {
    pub scorer_id: i64,
    pub team_id: i64,
    pub minute: i32,
}

impl GoalRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_minute(self.minute)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum CardType {
    #[serde(rename = "Y")]
    #[sqlx(rename = "Y")]
    Yellow,
    #[serde(rename = "R")]
    #[sqlx(rename = "R")]
    Red,
    #[serde(rename = "2Y")]
    #[sqlx(rename = "2Y")]
    SecondYellow,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Yellow => "Y",
            CardType::Red => "R",
            CardType::SecondYellow => "2Y",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CardType::Yellow => "Yellow Card",
            CardType::Red => "Red Card",
            CardType::SecondYellow => "Second Yellow/Red",
        }
    }

    /// Second yellows count towards the red card tally
    pub fn is_red(&self) -> bool {
        matches!(self, CardType::Red | CardType::SecondYellow)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Card {
    pub id: i64,
    pub match_id: i64,
    pub player_id: i64,
    pub card_type: CardType,
    pub minute: i32,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CardRequest {
    pub player_id: i64,
    pub card_type: CardType,
    pub minute: i32,
    pub reason: Option<String>,
}

impl CardRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_minute(self.minute)?;
        if let Some(reason) = &self.reason {
            if reason.chars().count() > 255 {
                return Err("Reason cannot exceed 255 characters".to_string());
            }
        }
        Ok(())
    }
}

fn validate_minute(minute: i32) -> Result<(), String> {
    if !(1..=MAX_EVENT_MINUTE).contains(&minute) {
        return Err(format!("Minute must be between 1 and {}", MAX_EVENT_MINUTE));
    }
    Ok(())
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct GoalWithScorer {
    pub id: i64,
    pub scorer_id: i64,
    pub scorer_name: String,
    pub team_id: i64,
    pub minute: i32,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct CardWithPlayer {
    pub id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub team_id: i64,
    pub team_name: String,
    pub card_type: CardType,
    pub minute: i32,
    pub reason: Option<String>,
}
