//! Built-in calculators (osu! via rosu-pp).

mod osu;

pub use osu::OsuCalculator;
