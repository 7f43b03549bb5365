//! The reconstructed result of a single play.

use crate::models::chart::ChartStats;
use crate::models::mods::ModSet;
use std::fmt;

/// Reasons a reconstruction ran on reduced information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Chart download failed or timed out, or the engine call failed.
    TransportFailure,
    /// Chart bytes could not be parsed.
    MalformedChart,
    /// Neither the provider nor the engine could tell the max combo.
    ComboUnresolved,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::TransportFailure => write!(f, "transport failure"),
            FailureKind::MalformedChart => write!(f, "malformed chart"),
            FailureKind::ComboUnresolved => write!(f, "max combo unresolved"),
        }
    }
}

/// Which rule decided the full-combo flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FcBasis {
    /// No misses and combo within tolerance of the resolved max combo.
    ComboTolerance,
    /// Max combo unknown or chart unavailable; only misses were checked.
    MissCountOnly,
}

/// Immutable outcome of a reconstruction. Optional figures are `None` when
/// they do not apply or could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    pub(crate) mods: ModSet,
    pub(crate) chart: ChartStats,
    pub(crate) pp: f64,
    pub(crate) is_fc: bool,
    pub(crate) fc_basis: FcBasis,
    pub(crate) if_fc_pp: Option<f64>,
    pub(crate) fail_progress: Option<f64>,
    pub(crate) max_combo: Option<u32>,
    pub(crate) degraded: Option<FailureKind>,
}

impl PlayOutcome {
    pub fn mods(&self) -> &ModSet {
        &self.mods
    }

    /// Chart stats with tempo mods applied.
    pub fn chart(&self) -> &ChartStats {
        &self.chart
    }

    /// Performance value reported for the play itself.
    pub fn pp(&self) -> f64 {
        self.pp
    }

    pub fn is_fc(&self) -> bool {
        self.is_fc
    }

    pub fn fc_basis(&self) -> FcBasis {
        self.fc_basis
    }

    /// Estimated performance value had the play been a full combo.
    pub fn if_fc_pp(&self) -> Option<f64> {
        self.if_fc_pp
    }

    /// Percentage of objects judged before a failed play ended.
    pub fn fail_progress(&self) -> Option<f64> {
        self.fail_progress
    }

    /// Resolved max combo of the chart, if known.
    pub fn max_combo(&self) -> Option<u32> {
        self.max_combo
    }

    /// First failure that forced a fallback, if any.
    pub fn degraded(&self) -> Option<FailureKind> {
        self.degraded
    }
}
