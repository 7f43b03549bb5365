//! osu! difficulty and performance calculator using rosu-pp.

use crate::difficulty::{CalcError, DifficultyCalculator, PerformanceQuery};
use rosu_pp::{Beatmap, Difficulty, Performance};

/// osu! calculator backed by rosu-pp.
#[derive(Debug, Clone, Default)]
pub struct OsuCalculator;

impl OsuCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl DifficultyCalculator for OsuCalculator {
    type Chart = Beatmap;

    fn id(&self) -> &str {
        "rosu-pp"
    }

    fn parse_chart(&self, bytes: &[u8]) -> Result<Beatmap, CalcError> {
        let map = Beatmap::from_bytes(bytes).map_err(|e| CalcError::InvalidBeatmap(e.to_string()))?;

        if map.hit_objects.is_empty() {
            return Err(CalcError::InvalidBeatmap("No hit objects found".to_string()));
        }

        // Only rejects maps built to stress the client: more than a day of
        // drain, 500k objects, or absurd density. Marathons still pass.
        map.check_suspicion()
            .map_err(|sus| CalcError::InvalidBeatmap(format!("Suspicious beatmap: {:?}", sus)))?;

        Ok(map)
    }

    fn object_count(&self, map: &Beatmap) -> u32 {
        let count = map
            .hit_objects
            .iter()
            .filter(|h| h.is_circle() || h.is_slider() || h.is_spinner())
            .count();

        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn max_combo(&self, map: &Beatmap, mods: u32) -> Result<u32, CalcError> {
        let attrs = Difficulty::new().mods(mods).calculate(map);

        match attrs.max_combo() {
            0 => Err(CalcError::CalculationFailed("Max combo is zero".to_string())),
            combo => Ok(combo),
        }
    }

    fn performance(&self, map: &Beatmap, query: &PerformanceQuery) -> Result<f64, CalcError> {
        let attrs = Performance::new(map)
            .mods(query.mods)
            .accuracy(query.accuracy)
            .misses(query.misses)
            .combo(query.combo)
            .calculate();

        let pp = attrs.pp();

        if pp.is_finite() {
            Ok(pp)
        } else {
            Err(CalcError::CalculationFailed(format!("Non-finite pp: {}", pp)))
        }
    }
}
