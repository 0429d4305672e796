use std::sync::Mutex;

use league_manager::league::store::{MatchStore, TeamStore};
use league_manager::models::matches::{Match, NewMatch};
use league_manager::models::team::Team;

/// Store kept in memory. Can be told to fail once a number of matches is saved.
pub struct InMemoryStore {
    teams: Vec<Team>,
    matches: Mutex<Vec<Match>>,
    fail_after: Option<usize>,
}

impl InMemoryStore {
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams,
            matches: Mutex::new(Vec::new()),
            fail_after: None,
        }
    }

    pub fn with_matches(teams: Vec<Team>, matches: Vec<Match>) -> Self {
        Self {
            teams,
            matches: Mutex::new(matches),
            fail_after: None,
        }
    }

    pub fn failing_after(teams: Vec<Team>, saves: usize) -> Self {
        Self {
            teams,
            matches: Mutex::new(Vec::new()),
            fail_after: Some(saves),
        }
    }

    pub fn saved_matches(&self) -> Vec<Match> {
        self.matches.lock().unwrap().clone()
    }
}

impl TeamStore for InMemoryStore {
    async fn list_teams(&self) -> Result<Vec<Team>, sqlx::Error> {
        let mut teams = self.teams.clone();
        teams.sort_by_key(|t| t.id);
        Ok(teams)
    }
}

impl MatchStore for InMemoryStore {
    async fn list_played_matches(&self) -> Result<Vec<Match>, sqlx::Error> {
        Ok(self
            .matches
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.is_played)
            .cloned()
            .collect())
    }

    async fn save_match(&self, new_match: &NewMatch) -> Result<Match, sqlx::Error> {
        let mut matches = self.matches.lock().unwrap();
        if let Some(limit) = self.fail_after {
            if matches.len() >= limit {
                return Err(sqlx::Error::Protocol("connection reset".into()));
            }
        }

        let saved = Match {
            id: matches.len() as i64 + 1,
            home_team_id: new_match.home_team_id,
            away_team_id: new_match.away_team_id,
            match_date: new_match.match_date,
            venue: new_match.venue.clone(),
            home_score: 0,
            away_score: 0,
            is_played: false,
            referee_id: new_match.referee_id,
        };
        matches.push(saved.clone());
        Ok(saved)
    }
}

pub fn teams(names: &[&str]) -> Vec<Team> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Team::new(i as i64 + 1, name))
        .collect()
}
