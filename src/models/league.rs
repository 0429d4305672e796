// src/models/league.rs
use serde::{Deserialize, Serialize};

use crate::models::event::{CardWithPlayer, GoalWithScorer};
use crate::models::matches::MatchWithTeams;
use crate::models::player::{RosterEntry, TopScorer};
use crate::models::report::MatchReport;
use crate::models::team::Team;

/// One team's line in the league table. Derived on every request, never stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StandingRow {
    pub team: Team,
    #[serde(rename = "P")]
    pub played: u32,
    #[serde(rename = "W")]
    pub wins: u32,
    #[serde(rename = "D")]
    pub draws: u32,
    #[serde(rename = "L")]
    pub losses: u32,
    #[serde(rename = "GF")]
    pub goals_for: i64,
    #[serde(rename = "GA")]
    pub goals_against: i64,
    #[serde(rename = "GD")]
    pub goal_difference: i64,
    #[serde(rename = "Pts")]
    pub points: u32,
}

impl StandingRow {
    pub fn empty(team: Team) -> Self {
        Self {
            team,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingRow>,
    pub scorers: Vec<TopScorer>,
}

#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub team: Team,
    pub players: Vec<RosterEntry>,
}

#[derive(Debug, Serialize)]
pub struct MatchDetailResponse {
    #[serde(rename = "match")]
    pub game: MatchWithTeams,
    pub label: String,
    pub winner: String,
    pub home_goals: Vec<GoalWithScorer>,
    pub away_goals: Vec<GoalWithScorer>,
    pub cards: Vec<CardWithPlayer>,
    pub report: Option<MatchReport>,
}

/// Outcome of a fixture generation run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FixtureRunSummary {
    pub teams: usize,
    pub rounds_per_leg: usize,
    pub first_leg_matches: usize,
    pub return_leg_matches: usize,
    pub saved: usize,
}
