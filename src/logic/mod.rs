//! Play outcome reconstruction.

pub mod classify;
pub mod combo;
pub mod compose;
pub mod engine;
pub mod estimate;

#[cfg(test)]
pub(crate) mod testing;

pub use classify::{FC_COMBO_TOLERANCE, classify, is_full_combo};
pub use combo::{ComboUnresolved, resolve_max_combo};
pub use engine::OutcomeEngine;
pub use estimate::{UNCAPPED_COMBO, fail_progress};
