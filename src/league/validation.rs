use crate::models::event::{CardRequest, GoalRequest};
use crate::models::matches::Match;
use crate::models::player::Player;

/// Cross-record checks that a single request payload cannot make on its own
pub struct LeagueValidator;

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    /// The credited team must be playing in the match. The scorer may belong
    /// to the other side (own goals).
    pub fn validate_goal(&self, game: &Match, request: &GoalRequest) -> Result<(), String> {
        request.validate()?;

        if !self.is_participant(game, request.team_id) {
            return Err(format!(
                "Team {} is not playing in match {}",
                request.team_id, game.id
            ));
        }

        Ok(())
    }

    /// Booked players must belong to one of the two sides
    pub fn validate_card(&self, game: &Match, player: &Player, request: &CardRequest) -> Result<(), String> {
        request.validate()?;

        if !self.is_participant(game, player.team_id) {
            return Err(format!(
                "Player {} does not play for either team in match {}",
                player.name, game.id
            ));
        }

        Ok(())
    }

    fn is_participant(&self, game: &Match, team_id: i64) -> bool {
        team_id == game.home_team_id || team_id == game.away_team_id
    }
}
