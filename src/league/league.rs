use chrono::{DateTime, TimeZone};
use sqlx::PgPool;

use crate::config::fixtures::FixtureSettings;
use crate::db;
use crate::league::schedule::{FixtureError, ScheduleService};
use crate::league::standings::StandingsService;
use crate::league::store::PgLeagueStore;
use crate::models::league::{FixtureRunSummary, MatchDetailResponse, RosterResponse, StandingsResponse};
use crate::models::matches::{MatchFilter, MatchListItem, ScheduleResponse};

/// Number of players listed in the scorers table next to the standings
const TOP_SCORERS_LIMIT: i64 = 10;

/// Main league service behind the public pages and the fixture generator
pub struct LeagueService {
    pool: PgPool,
    standings: StandingsService<PgLeagueStore>,
    schedule: ScheduleService<PgLeagueStore>,
}

impl LeagueService {
    pub fn new(pool: PgPool, fixture_settings: FixtureSettings) -> Self {
        let store = PgLeagueStore::new(pool.clone());
        Self {
            pool,
            standings: StandingsService::new(store.clone()),
            schedule: ScheduleService::new(store, fixture_settings),
        }
    }

    /// League table plus the top scorers
    pub async fn get_standings_page(&self) -> Result<StandingsResponse, sqlx::Error> {
        let standings = self.standings.get_standings().await?;
        let scorers = db::players::get_top_scorers(&self.pool, TOP_SCORERS_LIMIT).await?;

        Ok(StandingsResponse { standings, scorers })
    }

    /// Every match by date, split into results and upcoming fixtures
    pub async fn get_schedule(&self) -> Result<ScheduleResponse, sqlx::Error> {
        let all_matches = db::matches::list_matches_with_teams(&self.pool, &MatchFilter::default()).await?;

        let (played, upcoming): (Vec<_>, Vec<_>) = all_matches
            .into_iter()
            .partition(|m| m.game.is_played);

        Ok(ScheduleResponse {
            played_matches: played.into_iter().map(MatchListItem::from).collect(),
            upcoming_matches: upcoming.into_iter().map(MatchListItem::from).collect(),
        })
    }

    pub async fn get_roster(&self, team_slug: &str) -> Result<Option<RosterResponse>, sqlx::Error> {
        let Some(team) = db::teams::get_team_by_slug(&self.pool, team_slug).await? else {
            return Ok(None);
        };
        let players = db::players::get_roster(&self.pool, team.id).await?;

        Ok(Some(RosterResponse { team, players }))
    }

    /// Match with goals per side, cards and the report
    pub async fn get_match_detail(&self, match_id: i64) -> Result<Option<MatchDetailResponse>, sqlx::Error> {
        let Some(game) = db::matches::get_match_with_teams(&self.pool, match_id).await? else {
            return Ok(None);
        };

        let home_goals = db::events::list_goals_with_scorer(&self.pool, match_id, game.game.home_team_id).await?;
        let away_goals = db::events::list_goals_with_scorer(&self.pool, match_id, game.game.away_team_id).await?;
        let cards = db::events::list_cards_with_player(&self.pool, match_id).await?;
        let report = db::reports::get_report(&self.pool, match_id).await?;

        Ok(Some(MatchDetailResponse {
            label: game.label(),
            winner: game.winner(),
            game,
            home_goals,
            away_goals,
            cards,
            report,
        }))
    }

    /// Run the fixture generator over every registered team. Rounds follow
    /// the wall clock of `start_date`'s time zone.
    pub async fn generate_fixtures<Tz: TimeZone>(
        &self,
        start_date: DateTime<Tz>,
    ) -> Result<FixtureRunSummary, FixtureError> {
        match db::matches::count_matches(&self.pool).await {
            Ok(existing) if existing > 0 => tracing::warn!(
                "{} existing matches found. Generated fixtures will be added to the schedule.",
                existing
            ),
            Ok(_) => {}
            Err(e) => tracing::warn!("Could not count existing matches: {}", e),
        }

        self.schedule.generate_schedule(start_date).await
    }
}
