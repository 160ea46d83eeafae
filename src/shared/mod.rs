pub mod assistant;
pub mod config;
pub mod inference;
pub mod logging;
pub mod models;
pub mod prompt;
