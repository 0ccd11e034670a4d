//! CLI library components for the growth assessment calculator.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
