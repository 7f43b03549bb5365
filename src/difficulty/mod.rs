//! Difficulty and performance calculation.
//!
//! The pipeline in [`crate::logic`] consumes the external engine only
//! through the [`DifficultyCalculator`] trait. [`OsuCalculator`] is the
//! rosu-pp backed implementation used in production.

pub mod builtin;
pub mod calculator;

pub use builtin::OsuCalculator;
pub use calculator::{CalcError, DifficultyCalculator, PerformanceQuery};
