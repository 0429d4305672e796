use sqlx::PgPool;

use crate::db;
use crate::models::event::Goal;
use crate::models::matches::{is_played_from_scores, Match};

/// Derive a match score from its goal records.
///
/// Goals credited to a team that is not part of the match are ignored.
pub fn recompute_score(goals: &[Goal], game: &Match) -> (i32, i32) {
    goals
        .iter()
        .filter(|goal| goal.match_id == game.id)
        .fold((0, 0), |(home, away), goal| {
            if goal.team_id == game.home_team_id {
                (home + 1, away)
            } else if goal.team_id == game.away_team_id {
                (home, away + 1)
            } else {
                (home, away)
            }
        })
}

/// Bring a stored match score back in line with its goals.
///
/// Called explicitly after every goal mutation and after a match edit.
pub async fn refresh_match_score(pool: &PgPool, game: &Match) -> Result<Match, sqlx::Error> {
    let goals = db::events::list_goals(pool, game.id).await?;
    let (home_score, away_score) = recompute_score(&goals, game);

    if home_score == game.home_score
        && away_score == game.away_score
        && game.is_played == is_played_from_scores(home_score, away_score)
    {
        return Ok(game.clone());
    }

    tracing::info!(
        "Recomputed score for match {}: {}-{} (was {}-{})",
        game.id,
        home_score,
        away_score,
        game.home_score,
        game.away_score
    );

    db::matches::update_match_scores(pool, game.id, home_score, away_score).await
}
