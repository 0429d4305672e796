#![allow(dead_code)]

pub mod league_helpers;
pub mod memory_store;
pub mod utils;
