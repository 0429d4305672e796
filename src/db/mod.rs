pub mod events;
pub mod helpers;
pub mod matches;
pub mod players;
pub mod referees;
pub mod reports;
pub mod teams;
