use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::config::fixtures::FixtureSettings;
use crate::league::store::{MatchStore, TeamStore};
use crate::models::league::FixtureRunSummary;
use crate::models::matches::NewMatch;
use crate::models::team::Team;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Need at least 2 teams to generate a schedule, got {0}")]
    NotEnoughTeams(usize),
    #[error("Midnight on {0} does not exist in the local time zone")]
    StartDate(NaiveDate),
    #[error("No valid kick-off time for a round {0} days after the start")]
    RoundDate(u64),
    #[error("Failed to load teams: {0}")]
    Load(#[source] sqlx::Error),
    #[error("Saved {saved} of {total} fixtures before a storage error: {source}")]
    Storage {
        saved: usize,
        total: usize,
        #[source]
        source: sqlx::Error,
    },
}

impl FixtureError {
    /// Matches that were committed before the run stopped
    pub fn saved(&self) -> usize {
        match self {
            FixtureError::Storage { saved, .. } => *saved,
            _ => 0,
        }
    }
}

/// A place at the round-robin table: a team (by index into the team list) or the bye
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Team(usize),
    Bye,
}

/// Seats for `team_count` teams, padded with a bye when the count is odd
pub fn initial_seats(team_count: usize) -> Vec<Seat> {
    let mut seats: Vec<Seat> = (0..team_count).map(Seat::Team).collect();
    if team_count % 2 != 0 {
        seats.push(Seat::Bye);
    }
    seats
}

/// Circle-method rotation: seat 0 stays, the last seat moves to position 1
/// and everyone else shifts one place to the right.
pub fn rotate(seats: &[Seat]) -> Vec<Seat> {
    if seats.len() < 3 {
        return seats.to_vec();
    }

    let mut rotated = Vec::with_capacity(seats.len());
    rotated.push(seats[0]);
    rotated.push(seats[seats.len() - 1]);
    rotated.extend_from_slice(&seats[1..seats.len() - 1]);
    rotated
}

/// Pairings of one round as (home, away) team indices. Seat `i` meets seat
/// `n - 1 - i`; pairings involving the bye are dropped.
pub fn round_pairings(seats: &[Seat]) -> Vec<(usize, usize)> {
    let n = seats.len();
    (0..n / 2)
        .filter_map(|i| match (seats[i], seats[n - 1 - i]) {
            (Seat::Team(home), Seat::Team(away)) => Some((home, away)),
            _ => None,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Leg {
    First,
    Return,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledFixture {
    pub leg: Leg,
    /// Zero-based round within the leg
    pub round: usize,
    pub fixture: NewMatch,
}

/// Every fixture of a double round-robin, before anything is saved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixturePlan {
    pub team_count: usize,
    pub rounds_per_leg: usize,
    pub first_leg: Vec<ScheduledFixture>,
    pub return_leg: Vec<ScheduledFixture>,
}

impl FixturePlan {
    /// Fixtures in save order: the first leg round by round, then the return leg
    pub fn fixtures(&self) -> impl Iterator<Item = &ScheduledFixture> {
        self.first_leg.iter().chain(self.return_leg.iter())
    }

    pub fn len(&self) -> usize {
        self.first_leg.len() + self.return_leg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lay out a double round-robin for `teams` starting at `start`.
///
/// Rounds are spaced in calendar days on the wall clock of `start`'s time
/// zone, so every round keeps the local kick-off time across DST changes.
/// Each return fixture is dated one full leg after its first-leg counterpart.
pub fn plan_fixtures<Tz: TimeZone>(
    teams: &[Team],
    start: DateTime<Tz>,
    settings: &FixtureSettings,
) -> Result<FixturePlan, FixtureError> {
    if teams.len() < 2 {
        return Err(FixtureError::NotEnoughTeams(teams.len()));
    }

    let calendar = RoundCalendar::new(&start, settings.days_between_rounds);
    let mut seats = initial_seats(teams.len());
    let rounds_per_leg = seats.len() - 1;

    let mut first_leg = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);
    for round in 0..rounds_per_leg {
        let round_date = calendar.kickoff(round)?;
        tracing::debug!("Round {} on {}", round + 1, calendar.local_day(round)?);

        for (home, away) in round_pairings(&seats) {
            tracing::debug!("  - {} vs {}", teams[home].name, teams[away].name);
            first_leg.push(ScheduledFixture {
                leg: Leg::First,
                round,
                fixture: NewMatch::fixture(teams[home].id, teams[away].id, round_date),
            });
        }

        seats = rotate(&seats);
    }

    let return_leg = if teams.len() > 2 || settings.two_team_return_leg {
        first_leg
            .iter()
            .map(|scheduled| {
                let round_date = calendar.kickoff(rounds_per_leg + scheduled.round)?;
                Ok(ScheduledFixture {
                    leg: Leg::Return,
                    round: scheduled.round,
                    fixture: scheduled.fixture.reversed(round_date),
                })
            })
            .collect::<Result<Vec<_>, FixtureError>>()?
    } else {
        Vec::new()
    };

    Ok(FixturePlan {
        team_count: teams.len(),
        rounds_per_leg,
        first_leg,
        return_leg,
    })
}

/// Maps a round index (counted across both legs) to its local day and kick-off
struct RoundCalendar<Tz: TimeZone> {
    zone: Tz,
    first_day: NaiveDate,
    kickoff_time: NaiveTime,
    days_between_rounds: u64,
}

impl<Tz: TimeZone> RoundCalendar<Tz> {
    fn new(start: &DateTime<Tz>, days_between_rounds: u32) -> Self {
        let local = start.naive_local();
        Self {
            zone: start.timezone(),
            first_day: local.date(),
            kickoff_time: local.time(),
            days_between_rounds: u64::from(days_between_rounds),
        }
    }

    fn local_day(&self, round: usize) -> Result<NaiveDate, FixtureError> {
        let offset = self.days_between_rounds.saturating_mul(round as u64);
        self.first_day
            .checked_add_days(Days::new(offset))
            .ok_or(FixtureError::RoundDate(offset))
    }

    fn kickoff(&self, round: usize) -> Result<DateTime<Utc>, FixtureError> {
        let day = self.local_day(round)?;
        self.zone
            .from_local_datetime(&day.and_time(self.kickoff_time))
            .earliest()
            .map(|kickoff| kickoff.with_timezone(&Utc))
            .ok_or(FixtureError::RoundDate(self.days_between_rounds.saturating_mul(round as u64)))
    }
}

/// Save every planned fixture one at a time, in plan order.
///
/// There is no surrounding transaction: when a save fails the remaining
/// fixtures are skipped and the ones already written stay.
pub async fn persist_fixtures<S: MatchStore>(
    store: &S,
    plan: &FixturePlan,
) -> Result<usize, FixtureError> {
    let total = plan.len();
    let mut saved = 0;

    for scheduled in plan.fixtures() {
        if let Err(source) = store.save_match(&scheduled.fixture).await {
            tracing::error!("Fixture save failed after {}/{} matches: {}", saved, total, source);
            return Err(FixtureError::Storage { saved, total, source });
        }
        saved += 1;
        if saved % 10 == 0 {
            tracing::info!("Progress: {}/{} saved", saved, total);
        }
    }

    Ok(saved)
}

/// Midnight at the start of tomorrow, in the time zone of `now`
pub fn tomorrow_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<DateTime<Tz>, FixtureError> {
    let today = now.date_naive();
    let tomorrow = today.succ_opt().ok_or(FixtureError::StartDate(today))?;
    let midnight = tomorrow.and_hms_opt(0, 0, 0).ok_or(FixtureError::StartDate(tomorrow))?;

    now.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or(FixtureError::StartDate(tomorrow))
}

/// Service responsible for generating the league schedule
#[derive(Debug, Clone)]
pub struct ScheduleService<S> {
    store: S,
    settings: FixtureSettings,
}

impl<S> ScheduleService<S>
where
    S: TeamStore + MatchStore,
{
    pub fn new(store: S, settings: FixtureSettings) -> Self {
        Self { store, settings }
    }

    /// Generate and save a double round-robin for every team in the store
    pub async fn generate_schedule<Tz: TimeZone>(
        &self,
        start_date: DateTime<Tz>,
    ) -> Result<FixtureRunSummary, FixtureError> {
        let teams = self.store.list_teams().await.map_err(FixtureError::Load)?;

        tracing::info!(
            "Generating round-robin schedule for {} teams starting {}, rounds every {} days",
            teams.len(),
            start_date.naive_local().date(),
            self.settings.days_between_rounds
        );

        let plan = plan_fixtures(&teams, start_date, &self.settings)?;
        let saved = persist_fixtures(&self.store, &plan).await?;

        tracing::info!(
            "Schedule generation complete: {} fixtures over {} rounds per leg",
            saved,
            plan.rounds_per_leg
        );

        Ok(FixtureRunSummary {
            teams: plan.team_count,
            rounds_per_leg: plan.rounds_per_leg,
            first_leg_matches: plan.first_leg.len(),
            return_leg_matches: plan.return_leg.len(),
            saved,
        })
    }
}
