pub mod league_handler;
pub mod team_handler;
