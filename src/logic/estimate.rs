//! If-FC performance and fail progress estimation.

use crate::difficulty::{CalcError, DifficultyCalculator, PerformanceQuery};
use crate::models::{HitStatistics, ScoreRecord};

/// Combo handed to the calculator when the real max combo is unknown.
/// The calculator clamps it to the chart's own maximum, so this behaves as
/// "uncapped"; the resulting figure is an approximation.
pub const UNCAPPED_COMBO: u32 = 99_999;

/// Percentage of `total_objects` that received a judgement. Zero objects
/// yields zero.
pub fn fail_progress(stats: &HitStatistics, total_objects: u32) -> f64 {
    if total_objects == 0 {
        return 0.0;
    }

    100.0 * f64::from(stats.judged()) / f64::from(total_objects)
}

/// Zero-miss, max-combo version of a play.
pub fn if_fc_query(accuracy: f64, mods: u32, max_combo: Option<u32>) -> PerformanceQuery {
    PerformanceQuery {
        accuracy: accuracy * 100.0,
        mods,
        misses: 0,
        combo: max_combo.unwrap_or(UNCAPPED_COMBO),
    }
}

/// Everything the estimator needs besides the chart itself.
#[derive(Debug, Clone, Copy)]
pub struct EstimateInput<'a> {
    pub score: &'a ScoreRecord,
    pub mods: u32,
    pub is_fc: bool,
    pub max_combo: Option<u32>,
    /// Preferably counted from the parsed chart, else the provider summary.
    pub total_objects: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimate {
    pub if_fc_pp: Option<f64>,
    pub fail_progress: Option<f64>,
    /// Set when the calculator was asked for an if-FC value and failed.
    pub error: Option<CalcError>,
}

/// Computes fail progress for failed plays and the if-FC value for plays
/// that are not already full combos. Without a chart only fail progress can
/// be produced.
pub fn estimate<C: DifficultyCalculator>(
    calc: &C,
    chart: Option<&C::Chart>,
    input: &EstimateInput<'_>,
) -> Estimate {
    let mut estimate = Estimate::default();

    if input.score.is_failed() {
        estimate.fail_progress = Some(fail_progress(
            &input.score.statistics,
            input.total_objects,
        ));
    }

    if input.is_fc {
        return estimate;
    }

    let Some(chart) = chart else {
        return estimate;
    };

    let query = if_fc_query(input.score.accuracy, input.mods, input.max_combo);

    match calc.performance(chart, &query) {
        Ok(pp) => {
            log::debug!(
                "OUTCOME: if-FC estimate for chart {} (mods {}): {:.2}pp",
                input.score.beatmap.id,
                input.mods,
                pp
            );
            estimate.if_fc_pp = Some(pp);
        }
        Err(e) => estimate.error = Some(e),
    }

    estimate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::testing::{ScriptedCalculator, ScriptedChart};
    use crate::models::Grade;
    use crate::models::score::tests::score;

    fn input(score: &ScoreRecord, is_fc: bool, max_combo: Option<u32>) -> EstimateInput<'_> {
        EstimateInput {
            score,
            mods: 72,
            is_fc,
            max_combo,
            total_objects: 500,
        }
    }

    #[test]
    fn test_fail_progress() {
        let stats = HitStatistics {
            great: 100,
            ok: 5,
            meh: 0,
            miss: 3,
        };

        assert!((fail_progress(&stats, 500) - 21.6).abs() < 1e-9);
        assert_eq!(fail_progress(&stats, 0), 0.0);
    }

    #[test]
    fn test_full_combo_gets_no_estimate() {
        let calc = ScriptedCalculator::default();
        let play = score(0.99, 1000, 0, Grade::S);

        let estimate = estimate(&calc, Some(&ScriptedChart), &input(&play, true, Some(1000)));
        assert_eq!(estimate, Estimate::default());
        assert!(calc.performance_queries().is_empty());
    }

    #[test]
    fn test_choke_queries_zero_miss_max_combo() {
        let calc = ScriptedCalculator::default().with_performance(Ok(321.0));
        let play = score(0.9767, 400, 2, Grade::A);

        let estimate = estimate(&calc, Some(&ScriptedChart), &input(&play, false, Some(1000)));
        assert_eq!(estimate.if_fc_pp, Some(321.0));
        assert_eq!(estimate.fail_progress, None);

        let queries = calc.performance_queries();
        assert_eq!(queries.len(), 1);
        assert!((queries[0].accuracy - 97.67).abs() < 1e-9);
        assert_eq!(queries[0].mods, 72);
        assert_eq!(queries[0].misses, 0);
        assert_eq!(queries[0].combo, 1000);
    }

    #[test]
    fn test_unknown_max_combo_uses_sentinel() {
        let calc = ScriptedCalculator::default();
        let play = score(0.9, 400, 2, Grade::B);

        estimate(&calc, Some(&ScriptedChart), &input(&play, false, None));
        assert_eq!(calc.performance_queries()[0].combo, UNCAPPED_COMBO);
    }

    #[test]
    fn test_failed_play_gets_both() {
        let calc = ScriptedCalculator::default().with_performance(Ok(150.0));
        let mut play = score(0.8, 50, 3, Grade::F);
        play.statistics = HitStatistics {
            great: 100,
            ok: 5,
            meh: 0,
            miss: 3,
        };

        let estimate = estimate(&calc, Some(&ScriptedChart), &input(&play, false, Some(1000)));
        assert!((estimate.fail_progress.unwrap() - 21.6).abs() < 1e-9);
        assert_eq!(estimate.if_fc_pp, Some(150.0));
    }

    #[test]
    fn test_calculator_failure_is_reported() {
        let failure = CalcError::CalculationFailed("boom".to_string());
        let calc = ScriptedCalculator::default().with_performance(Err(failure.clone()));
        let play = score(0.9, 400, 2, Grade::B);

        let estimate = estimate(&calc, Some(&ScriptedChart), &input(&play, false, Some(1000)));
        assert_eq!(estimate.if_fc_pp, None);
        assert_eq!(estimate.error, Some(failure));
    }

    #[test]
    fn test_no_chart_only_fail_progress() {
        let calc = ScriptedCalculator::default();
        let play = score(0.5, 10, 5, Grade::F);

        let estimate = estimate::<ScriptedCalculator>(&calc, None, &input(&play, false, None));
        assert!(estimate.fail_progress.is_some());
        assert_eq!(estimate.if_fc_pp, None);
        assert_eq!(estimate.error, None);
    }
}
