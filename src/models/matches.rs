// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Match {
    pub id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub match_date: DateTime<Utc>,
    pub venue: Option<String>,
    pub home_score: i32,
    pub away_score: i32,
    pub is_played: bool,
    pub referee_id: Option<i64>,
}

/// A match that has not been persisted yet
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewMatch {
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub match_date: DateTime<Utc>,
    pub venue: Option<String>,
    pub referee_id: Option<i64>,
}

impl NewMatch {
    pub fn fixture(home_team_id: i64, away_team_id: i64, match_date: DateTime<Utc>) -> Self {
        Self {
            home_team_id,
            away_team_id,
            match_date,
            venue: None,
            referee_id: None,
        }
    }

    /// The same pairing with home and away swapped
    pub fn reversed(&self, match_date: DateTime<Utc>) -> Self {
        Self {
            home_team_id: self.away_team_id,
            away_team_id: self.home_team_id,
            match_date,
            venue: None,
            referee_id: self.referee_id,
        }
    }
}

/// A match counts as played as soon as either side has scored.
///
/// A goalless draw therefore stays "not played" until a goal is recorded.
pub fn is_played_from_scores(home_score: i32, away_score: i32) -> bool {
    home_score > 0 || away_score > 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    NotPlayed,
    HomeWin,
    AwayWin,
    Draw,
}

impl Match {
    pub fn outcome(&self) -> MatchOutcome {
        if !self.is_played {
            MatchOutcome::NotPlayed
        } else if self.home_score > self.away_score {
            MatchOutcome::HomeWin
        } else if self.away_score > self.home_score {
            MatchOutcome::AwayWin
        } else {
            MatchOutcome::Draw
        }
    }

    /// Winner column as shown in the admin list: a team name, "Draw" or "N/A"
    pub fn winner_label(&self, home_team_name: &str, away_team_name: &str) -> String {
        match self.outcome() {
            MatchOutcome::NotPlayed => "N/A".to_string(),
            MatchOutcome::HomeWin => home_team_name.to_string(),
            MatchOutcome::AwayWin => away_team_name.to_string(),
            MatchOutcome::Draw => "Draw".to_string(),
        }
    }
}

/// Request to create or edit a match. Scores are never accepted here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchRequest {
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub match_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub referee_id: Option<i64>,
}

impl MatchRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.home_team_id == self.away_team_id {
            return Err("Home and away team must be different".to_string());
        }
        if let Some(venue) = &self.venue {
            if venue.chars().count() > 100 {
                return Err("Venue cannot exceed 100 characters".to_string());
            }
        }
        Ok(())
    }

    pub fn into_new_match(self) -> NewMatch {
        NewMatch {
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            match_date: self.match_date.unwrap_or_else(Utc::now),
            venue: self.venue,
            referee_id: self.referee_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct MatchFilter {
    pub is_played: Option<bool>,
    pub team_id: Option<i64>,
    pub referee_id: Option<i64>,
}

impl fmt::Display for MatchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "is_played: {:?}, team_id: {:?}, referee_id: {:?}",
            self.is_played, self.team_id, self.referee_id
        )
    }
}

/// Match joined with the names needed for display
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchWithTeams {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub game: Match,
    pub home_team_name: String,
    pub away_team_name: String,
    pub referee_name: Option<String>,
}

impl MatchWithTeams {
    /// "Home vs Away (YYYY-MM-DD)"
    pub fn label(&self) -> String {
        format!(
            "{} vs {} ({})",
            self.home_team_name,
            self.away_team_name,
            self.game.match_date.format("%Y-%m-%d")
        )
    }

    pub fn winner(&self) -> String {
        self.game.winner_label(&self.home_team_name, &self.away_team_name)
    }
}

#[derive(Debug, Serialize)]
pub struct MatchListItem {
    #[serde(flatten)]
    pub game: MatchWithTeams,
    pub label: String,
    pub winner: String,
}

impl From<MatchWithTeams> for MatchListItem {
    fn from(game: MatchWithTeams) -> Self {
        let label = game.label();
        let winner = game.winner();
        Self { game, label, winner }
    }
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub played_matches: Vec<MatchListItem>,
    pub upcoming_matches: Vec<MatchListItem>,
}
