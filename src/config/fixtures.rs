use serde::Deserialize;

/// Longest allowed gap between two rounds
pub const MAX_DAYS_BETWEEN_ROUNDS: u32 = 365;

/// Knobs for the fixture generator.
#[derive(Debug, Deserialize, Clone)]
pub struct FixtureSettings {
    /// Calendar days between consecutive rounds, counted on the local wall clock
    #[serde(default = "default_days_between_rounds")]
    pub days_between_rounds: u32,
    /// A two-team league only plays a single fixture unless this is set.
    #[serde(default)]
    pub two_team_return_leg: bool,
}

fn default_days_between_rounds() -> u32 {
    7
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            days_between_rounds: default_days_between_rounds(),
            two_team_return_leg: false,
        }
    }
}

impl FixtureSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_DAYS_BETWEEN_ROUNDS).contains(&self.days_between_rounds) {
            return Err(format!(
                "fixtures.days_between_rounds must be between 1 and {}, got {}",
                MAX_DAYS_BETWEEN_ROUNDS, self.days_between_rounds
            ));
        }
        Ok(())
    }
}
