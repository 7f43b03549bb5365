//! Reconstructs the outcome of recent osu! plays: full-combo check, if-FC
//! performance and fail progress, with graceful degradation when the chart
//! or the calculator is unavailable.

pub mod commands;
pub mod database;
pub mod difficulty;
pub mod logic;
pub mod models;
pub mod network;
pub mod views;
