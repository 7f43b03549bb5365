//! HTTP collaborators: the osu! API and chart downloads.

pub mod chart;
pub mod osu_api;

pub use chart::{ChartSource, FetchError, HttpChartSource};
pub use osu_api::{ApiError, OsuApi, ScoreProvider};

/// Sent with every outgoing request.
pub(crate) const USER_AGENT: &str = concat!("osu-recent/", env!("CARGO_PKG_VERSION"));
