//! Score and beatmap records as delivered by the osu! API.
//!
//! These are read-only inputs. Deserialization is deliberately lenient:
//! statistics may use either lazer or legacy key names and any of them may
//! be missing, beatmap stats may be null, and mods come in several shapes
//! (see [`RawMods`]).

use crate::models::chart::ChartStats;
use crate::models::mods::{ModSet, RawMods};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Letter grade of a play. `F` marks a failed play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Grade {
    #[serde(rename = "XH")]
    SilverSS,
    #[serde(rename = "X")]
    SS,
    #[serde(rename = "SH")]
    SilverS,
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn is_failed(self) -> bool {
        self == Grade::F
    }

    /// Label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Grade::SilverSS => "SSH",
            Grade::SS => "SS",
            Grade::SilverS => "SH",
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "Fail",
        }
    }
}

/// Judgement counts of a play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawStatistics")]
pub struct HitStatistics {
    pub great: u32,
    pub ok: u32,
    pub meh: u32,
    pub miss: u32,
}

impl HitStatistics {
    /// Number of objects that received a judgement.
    pub fn judged(&self) -> u32 {
        self.great + self.ok + self.meh + self.miss
    }
}

/// Both key sets the API has used over time. Lazer keys win when both exist.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStatistics {
    great: Option<u32>,
    ok: Option<u32>,
    meh: Option<u32>,
    miss: Option<u32>,
    count_300: Option<u32>,
    count_100: Option<u32>,
    count_50: Option<u32>,
    count_miss: Option<u32>,
}

impl From<RawStatistics> for HitStatistics {
    fn from(raw: RawStatistics) -> Self {
        Self {
            great: raw.great.or(raw.count_300).unwrap_or(0),
            ok: raw.ok.or(raw.count_100).unwrap_or(0),
            meh: raw.meh.or(raw.count_50).unwrap_or(0),
            miss: raw.miss.or(raw.count_miss).unwrap_or(0),
        }
    }
}

/// Beatmap summary embedded in a score.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BeatmapSummary {
    pub id: u32,
    pub version: String,
    pub url: Option<String>,
    pub bpm: Option<f64>,
    pub total_length: Option<f64>,
    pub cs: Option<f64>,
    pub ar: Option<f64>,
    /// Overall difficulty; the API calls it `accuracy`.
    pub accuracy: Option<f64>,
    pub drain: Option<f64>,
    pub max_combo: Option<u32>,
    pub count_circles: u32,
    pub count_sliders: u32,
    pub count_spinners: u32,
}

impl BeatmapSummary {
    pub fn object_count(&self) -> u32 {
        self.count_circles + self.count_sliders + self.count_spinners
    }

    /// Unadjusted chart stats with missing values defaulted to zero.
    pub fn stats(&self) -> ChartStats {
        ChartStats {
            bpm: self.bpm.unwrap_or(0.0),
            length_secs: self.total_length.unwrap_or(0.0),
            cs: self.cs.unwrap_or(0.0),
            ar: self.ar.unwrap_or(0.0),
            od: self.accuracy.unwrap_or(0.0),
            hp: self.drain.unwrap_or(0.0),
            object_count: self.object_count(),
            max_combo: self.max_combo,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BeatmapsetSummary {
    pub title: String,
    pub artist: String,
}

/// A single play as returned by the recent scores endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRecord {
    /// Accuracy as a fraction in `[0, 1]`.
    pub accuracy: f64,
    #[serde(default)]
    pub max_combo: u32,
    #[serde(default)]
    pub statistics: HitStatistics,
    #[serde(default)]
    pub pp: Option<f64>,
    pub rank: Grade,
    #[serde(default)]
    pub mods: Option<RawMods>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub beatmap: BeatmapSummary,
    #[serde(default)]
    pub beatmapset: Option<BeatmapsetSummary>,
}

impl ScoreRecord {
    pub fn mod_set(&self) -> ModSet {
        ModSet::decode(self.mods.as_ref())
    }

    pub fn is_failed(&self) -> bool {
        self.rank.is_failed()
    }

    /// Completion time; legacy payloads only carry `created_at`.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at.or(self.created_at)
    }
}
