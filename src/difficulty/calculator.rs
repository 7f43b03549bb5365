//! Trait definition for the external difficulty/performance engine.
//!
//! The outcome pipeline only ever talks to the engine through
//! [`DifficultyCalculator`], so tests can swap in a scripted calculator and
//! the real one ([`super::OsuCalculator`]) stays a thin adapter.

use std::fmt::Debug;

/// Error type for difficulty calculation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The beatmap data is invalid or missing.
    InvalidBeatmap(String),
    /// The calculator failed to compute the requested value.
    CalculationFailed(String),
    /// The calculation did not finish in time.
    Timeout,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::InvalidBeatmap(msg) => write!(f, "Invalid beatmap: {}", msg),
            CalcError::CalculationFailed(msg) => write!(f, "Calculation failed: {}", msg),
            CalcError::Timeout => write!(f, "Calculation timed out"),
        }
    }
}

impl std::error::Error for CalcError {}

/// Inputs of a hypothetical performance calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceQuery {
    /// Accuracy in percent (0-100).
    pub accuracy: f64,
    /// Legacy mod bitmask.
    pub mods: u32,
    pub misses: u32,
    pub combo: u32,
}

/// Trait that the difficulty/performance engine must implement.
///
/// All methods are pure functions of their inputs but may be slow, so
/// callers run them off the async executor.
pub trait DifficultyCalculator: Send + Sync + Debug {
    /// Parsed in-memory chart model.
    type Chart: Send + 'static;

    /// Unique identifier, used in logs.
    fn id(&self) -> &str;

    /// Parses raw `.osu` bytes.
    fn parse_chart(&self, bytes: &[u8]) -> Result<Self::Chart, CalcError>;

    /// Circles + sliders + spinners of a parsed chart.
    fn object_count(&self, chart: &Self::Chart) -> u32;

    /// Maximum achievable combo with the given mods.
    fn max_combo(&self, chart: &Self::Chart, mods: u32) -> Result<u32, CalcError>;

    /// Performance value of a hypothetical play.
    fn performance(&self, chart: &Self::Chart, query: &PerformanceQuery) -> Result<f64, CalcError>;
}
