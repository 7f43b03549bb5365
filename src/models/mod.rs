pub mod chart;
pub mod mods;
pub mod outcome;
pub mod score;
pub mod settings;
pub mod user;

pub use chart::ChartStats;
pub use mods::{ModSet, RawMods};
pub use outcome::{FailureKind, FcBasis, PlayOutcome};
pub use score::{Grade, HitStatistics, ScoreRecord};
pub use settings::Settings;
pub use user::{User, UserStatistics};
