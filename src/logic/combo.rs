//! Max combo resolution.

use crate::difficulty::{CalcError, DifficultyCalculator};
use std::fmt;

/// Neither the provider nor the calculator produced a usable max combo.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboUnresolved {
    /// Calculator error, if the calculator was asked at all.
    pub cause: Option<CalcError>,
}

impl fmt::Display for ComboUnresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "Max combo unresolved: {}", cause),
            None => write!(f, "Max combo unresolved: no chart available"),
        }
    }
}

impl std::error::Error for ComboUnresolved {}

/// Resolves the chart's max combo.
///
/// The provider's value wins when present. Otherwise the calculator is asked
/// for the parsed chart under `mods`. A zero combo counts as absent.
pub fn resolve_max_combo<C: DifficultyCalculator>(
    calc: &C,
    chart: Option<&C::Chart>,
    provided: Option<u32>,
    mods: u32,
) -> Result<u32, ComboUnresolved> {
    if let Some(combo) = provided.filter(|&combo| combo > 0) {
        return Ok(combo);
    }

    let Some(chart) = chart else {
        return Err(ComboUnresolved { cause: None });
    };

    match calc.max_combo(chart, mods) {
        Ok(combo) if combo > 0 => Ok(combo),
        Ok(_) => Err(ComboUnresolved {
            cause: Some(CalcError::CalculationFailed("Max combo is zero".to_string())),
        }),
        Err(e) => Err(ComboUnresolved { cause: Some(e) }),
    }
}
