pub mod event_handler;
pub mod fixture_handler;
pub mod match_handler;
pub mod player_handler;
pub mod referee_handler;
pub mod report_handler;
pub mod team_handler;
