//! Final assembly of a [`PlayOutcome`].

use crate::logic::estimate::Estimate;
use crate::models::{ChartStats, FailureKind, FcBasis, ModSet, PlayOutcome, ScoreRecord};

/// Chart-dependent results of one reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub max_combo: Option<u32>,
    pub is_fc: bool,
    pub fc_basis: FcBasis,
    pub estimate: Estimate,
    pub degraded: Option<FailureKind>,
}

/// Packages the pieces into an outcome. No computation beyond field
/// selection: the achieved pp is the score's own value (zero if missing).
pub fn compose(
    mods: ModSet,
    mut chart: ChartStats,
    score: &ScoreRecord,
    evaluation: Evaluation,
) -> PlayOutcome {
    chart.max_combo = evaluation.max_combo;

    PlayOutcome {
        mods,
        chart,
        pp: score.pp.unwrap_or(0.0),
        is_fc: evaluation.is_fc,
        fc_basis: evaluation.fc_basis,
        if_fc_pp: evaluation.estimate.if_fc_pp,
        fail_progress: evaluation.estimate.fail_progress,
        max_combo: evaluation.max_combo,
        degraded: evaluation.degraded,
    }
}
