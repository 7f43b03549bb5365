//! Play outcome reconstruction pipeline.
//!
//! Mod decoding and tempo adjustment run alongside the chart download. Once
//! both are done, chart parsing, combo resolution, classification and the
//! if-FC estimate run on a blocking thread. Any failure on the chart side
//! degrades the outcome instead of failing it: the if-FC figure is dropped
//! and the FC flag falls back to the miss count.

use crate::difficulty::{CalcError, DifficultyCalculator};
use crate::logic::classify::classify;
use crate::logic::combo::resolve_max_combo;
use crate::logic::compose::{Evaluation, compose};
use crate::logic::estimate::{EstimateInput, estimate};
use crate::models::{FailureKind, FcBasis, PlayOutcome, ScoreRecord};
use crate::network::{ChartSource, FetchError};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

impl From<&CalcError> for FailureKind {
    fn from(err: &CalcError) -> Self {
        match err {
            CalcError::InvalidBeatmap(_) => FailureKind::MalformedChart,
            CalcError::CalculationFailed(_) | CalcError::Timeout => FailureKind::TransportFailure,
        }
    }
}

/// Reconstructs [`PlayOutcome`]s from score records.
///
/// Holds its collaborators explicitly so tests can swap in doubles.
#[derive(Debug)]
pub struct OutcomeEngine<S, C> {
    source: S,
    calculator: Arc<C>,
    timeout: Duration,
}

impl<S, C> OutcomeEngine<S, C>
where
    S: ChartSource,
    C: DifficultyCalculator + 'static,
{
    pub fn new(source: S, calculator: C) -> Self {
        Self {
            source,
            calculator: Arc::new(calculator),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Bound applied to the chart download and, separately, to the
    /// calculation.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reconstructs the outcome of `score`. Never fails.
    pub async fn reconstruct(&self, score: &ScoreRecord) -> PlayOutcome {
        let chart_id = score.beatmap.id;

        let ((mods, chart), download) = tokio::join!(
            async {
                let mods = score.mod_set();
                let chart = score.beatmap.stats().adjusted(&mods);
                (mods, chart)
            },
            self.download(chart_id),
        );

        let bits = mods.bits();

        let evaluation = match download {
            Ok(bytes) => self.evaluate_chart(bytes, score, bits).await,
            Err(e) => {
                log::warn!(
                    "OUTCOME: chart {} (mods {}) degraded: {}: {}",
                    chart_id,
                    bits,
                    FailureKind::TransportFailure,
                    e
                );
                evaluate(&*self.calculator, Err(FailureKind::TransportFailure), score, bits)
            }
        };

        compose(mods, chart, score, evaluation)
    }

    async fn download(&self, chart_id: u32) -> Result<Vec<u8>, FetchError> {
        match timeout(self.timeout, self.source.fetch_chart(chart_id)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout),
        }
    }

    /// Runs the calculator work on a blocking thread, bounded by the timeout.
    async fn evaluate_chart(&self, bytes: Vec<u8>, score: &ScoreRecord, mods: u32) -> Evaluation {
        let calculator = Arc::clone(&self.calculator);
        let owned = score.clone();

        let task = tokio::task::spawn_blocking(move || {
            let chart = calculator.parse_chart(&bytes).map_err(|e| {
                let kind = FailureKind::from(&e);
                log::warn!(
                    "OUTCOME: chart {} (mods {}) degraded: {}: {}",
                    owned.beatmap.id,
                    mods,
                    kind,
                    e
                );
                kind
            });

            evaluate(&*calculator, chart, &owned, mods)
        });

        let failure = match timeout(self.timeout, task).await {
            Ok(Ok(evaluation)) => return evaluation,
            Ok(Err(join_err)) => CalcError::CalculationFailed(join_err.to_string()),
            Err(_) => {
                // Blocking tasks cannot be cancelled; the work runs on detached
                // and its result is dropped.
                log::debug!(
                    "OUTCOME: chart {} calculation abandoned after {:?}",
                    score.beatmap.id,
                    self.timeout
                );
                CalcError::Timeout
            }
        };

        let kind = FailureKind::from(&failure);
        log::warn!(
            "OUTCOME: chart {} (mods {}) degraded: {}: {} ({})",
            score.beatmap.id,
            mods,
            kind,
            failure,
            self.calculator.id()
        );

        evaluate(&*self.calculator, Err(kind), score, mods)
    }
}

/// Combo resolution, classification and estimation for one play.
///
/// `chart` is the parsed chart, or the reason there is none.
pub fn evaluate<C: DifficultyCalculator>(
    calc: &C,
    chart: Result<C::Chart, FailureKind>,
    score: &ScoreRecord,
    mods: u32,
) -> Evaluation {
    let chart_id = score.beatmap.id;
    let (chart, mut degraded) = match chart {
        Ok(chart) => (Some(chart), None),
        Err(kind) => (None, Some(kind)),
    };

    let max_combo = match resolve_max_combo(calc, chart.as_ref(), score.beatmap.max_combo, mods) {
        Ok(combo) => Some(combo),
        Err(e) => {
            log::warn!(
                "OUTCOME: chart {} (mods {}) degraded: {}: {}",
                chart_id,
                mods,
                FailureKind::ComboUnresolved,
                e
            );
            degraded.get_or_insert(FailureKind::ComboUnresolved);
            None
        }
    };

    let misses = score.statistics.miss;
    let (mut is_fc, mut fc_basis) = match chart {
        Some(_) => classify(misses, score.max_combo, max_combo),
        None => (misses == 0, FcBasis::MissCountOnly),
    };

    let total_objects = chart
        .as_ref()
        .map(|chart| calc.object_count(chart))
        .unwrap_or_else(|| score.beatmap.object_count());

    let input = EstimateInput {
        score,
        mods,
        is_fc,
        max_combo,
        total_objects,
    };
    let estimate = estimate(calc, chart.as_ref(), &input);

    if let Some(e) = &estimate.error {
        let kind = FailureKind::from(e);
        log::warn!(
            "OUTCOME: chart {} (mods {}) degraded: {}: {}",
            chart_id,
            mods,
            kind,
            e
        );
        degraded.get_or_insert(kind);
        is_fc = misses == 0;
        fc_basis = FcBasis::MissCountOnly;
    }

    Evaluation {
        max_combo,
        is_fc,
        fc_basis,
        estimate,
        degraded,
    }
}
