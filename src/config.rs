pub mod settings;
pub mod fixtures;
