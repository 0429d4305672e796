use crate::league::store::{MatchStore, TeamStore};
use crate::models::league::StandingRow;
use crate::models::matches::Match;
use crate::models::team::Team;

/// Build the league table from every team and every played match.
///
/// Teams without a played match still get an all-zero row. Rows are ordered
/// by points, then goal difference, then goals scored; anything still tied
/// keeps the order in which `teams` was given.
pub fn compute_standings(teams: &[Team], played_matches: &[Match]) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = teams
        .iter()
        .map(|team| {
            let mut row = StandingRow::empty(team.clone());

            for game in played_matches.iter().filter(|m| m.is_played) {
                let (goals_for, goals_against) = if game.home_team_id == team.id {
                    (game.home_score, game.away_score)
                } else if game.away_team_id == team.id {
                    (game.away_score, game.home_score)
                } else {
                    continue;
                };
                record_result(&mut row, goals_for, goals_against);
            }

            row.goal_difference = row.goals_for - row.goals_against;
            row
        })
        .collect();

    // sort_by is stable
    rows.sort_by(|a, b| {
        (b.points, b.goal_difference, b.goals_for).cmp(&(a.points, a.goal_difference, a.goals_for))
    });

    rows
}

fn record_result(row: &mut StandingRow, goals_for: i32, goals_against: i32) {
    row.played += 1;
    row.goals_for += i64::from(goals_for);
    row.goals_against += i64::from(goals_against);

    if goals_for > goals_against {
        row.wins += 1;
        row.points += 3;
    } else if goals_for == goals_against {
        row.draws += 1;
        row.points += 1;
    } else {
        row.losses += 1;
    }
}

/// Service responsible for the league table
#[derive(Debug, Clone)]
pub struct StandingsService<S> {
    store: S,
}

impl<S> StandingsService<S>
where
    S: TeamStore + MatchStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load teams and played matches, then rank them. Nothing is persisted.
    pub async fn get_standings(&self) -> Result<Vec<StandingRow>, sqlx::Error> {
        let teams = self.store.list_teams().await?;
        let played = self.store.list_played_matches().await?;

        tracing::debug!(
            "Computing standings for {} teams from {} played matches",
            teams.len(),
            played.len()
        );

        Ok(compute_standings(&teams, &played))
    }
}
