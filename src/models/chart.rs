//! Chart statistics and tempo adjustment.

use crate::models::mods::ModSet;

/// Clock rate applied by DT / NC.
pub const DOUBLE_TIME_RATE: f64 = 1.5;
/// Clock rate applied by HT.
pub const HALF_TIME_RATE: f64 = 0.75;

/// Display statistics of a chart, as reported by the score provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartStats {
    pub bpm: f64,
    /// Drain length in seconds.
    pub length_secs: f64,
    pub cs: f64,
    pub ar: f64,
    pub od: f64,
    pub hp: f64,
    /// Circles + sliders + spinners.
    pub object_count: u32,
    pub max_combo: Option<u32>,
}

impl ChartStats {
    /// Returns a copy with BPM and length scaled for the tempo mods in `mods`.
    pub fn adjusted(&self, mods: &ModSet) -> Self {
        let (bpm, length_secs) = adjust_tempo(self.bpm, self.length_secs, mods);

        Self {
            bpm,
            length_secs,
            ..self.clone()
        }
    }

    /// Length formatted as `m:ss`.
    pub fn length_display(&self) -> String {
        format_length(self.length_secs)
    }
}

/// Clock rate implied by a mod set. DT / NC win over HT.
pub fn clock_rate(mods: &ModSet) -> f64 {
    if mods.contains("DT") || mods.contains("NC") {
        DOUBLE_TIME_RATE
    } else if mods.contains("HT") {
        HALF_TIME_RATE
    } else {
        1.0
    }
}

/// Scales BPM up and duration down by the mod set's clock rate.
pub fn adjust_tempo(bpm: f64, duration_secs: f64, mods: &ModSet) -> (f64, f64) {
    let rate = clock_rate(mods);
    (bpm * rate, duration_secs / rate)
}

/// Formats seconds as `m:ss`, truncating fractional seconds.
pub fn format_length(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
