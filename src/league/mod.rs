pub mod league;
pub mod schedule;
pub mod scoring;
pub mod standings;
pub mod store;
pub mod validation;
