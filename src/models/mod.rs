pub mod event;
pub mod league;
pub mod matches;
pub mod player;
pub mod referee;
pub mod report;
pub mod team;
