//! User profile as delivered by the osu! API.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    /// ISO country code, e.g. `KR`.
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Mode statistics. Absent for users who never played the mode.
    #[serde(default)]
    pub statistics: UserStatistics,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserStatistics {
    /// `None` for inactive users.
    pub global_rank: Option<u32>,
    pub country_rank: Option<u32>,
    pub pp: f64,
    /// Percent, 0-100.
    pub hit_accuracy: f64,
    pub maximum_combo: u32,
    pub play_count: u32,
    /// Seconds.
    pub play_time: Option<u64>,
    pub level: UserLevel,
    pub grade_counts: GradeCounts,
}

impl UserStatistics {
    pub fn play_hours(&self) -> f64 {
        self.play_time.unwrap_or(0) as f64 / 3600.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserLevel {
    pub current: u32,
    /// Percent towards the next level.
    pub progress: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GradeCounts {
    pub ssh: u32,
    pub ss: u32,
    pub sh: u32,
    pub s: u32,
    pub a: u32,
}
