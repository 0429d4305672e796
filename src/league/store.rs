use sqlx::PgPool;

use crate::db;
use crate::models::matches::{Match, NewMatch};
use crate::models::team::Team;

/// Source of the teams taking part in the league
#[allow(async_fn_in_trait)]
pub trait TeamStore {
    /// All teams, ordered by primary key so seeding is deterministic
    async fn list_teams(&self) -> Result<Vec<Team>, sqlx::Error>;
}

/// Match persistence as seen by standings and fixture generation
#[allow(async_fn_in_trait)]
pub trait MatchStore {
    async fn list_played_matches(&self) -> Result<Vec<Match>, sqlx::Error>;

    async fn save_match(&self, new_match: &NewMatch) -> Result<Match, sqlx::Error>;
}

/// Postgres-backed store
#[derive(Debug, Clone)]
pub struct PgLeagueStore {
    pool: PgPool,
}

impl PgLeagueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TeamStore for PgLeagueStore {
    async fn list_teams(&self) -> Result<Vec<Team>, sqlx::Error> {
        db::teams::list_teams_by_id(&self.pool).await
    }
}

impl MatchStore for PgLeagueStore {
    async fn list_played_matches(&self) -> Result<Vec<Match>, sqlx::Error> {
        db::matches::list_played_matches(&self.pool).await
    }

    async fn save_match(&self, new_match: &NewMatch) -> Result<Match, sqlx::Error> {
        db::matches::insert_match(&self.pool, new_match).await
    }
}

impl<T: TeamStore> TeamStore for &T {
    async fn list_teams(&self) -> Result<Vec<Team>, sqlx::Error> {
        (**self).list_teams().await
    }
}

impl<T: MatchStore> MatchStore for &T {
    async fn list_played_matches(&self) -> Result<Vec<Match>, sqlx::Error> {
        (**self).list_played_matches().await
    }

    async fn save_match(&self, new_match: &NewMatch) -> Result<Match, sqlx::Error> {
        (**self).save_match(new_match).await
    }
}
