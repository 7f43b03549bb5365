//! Mod decoding.
//!
//! Scores reach us with their mods in several shapes depending on which API
//! format produced them: a list of `{ "acronym": "DT", ... }` objects, a list
//! of plain acronym strings, a single space-joined string, or an already
//! numeric legacy bitmask. Everything is funnelled through [`ModSet::decode`]
//! so nothing downstream has to care which one it was.

use serde::Deserialize;
use std::fmt;

/// Bit value of every mod the performance engine understands.
///
/// `NC` carries `DT`'s bit as well, which is why the mask is built with a
/// bitwise or rather than a sum.
pub const MOD_BITS: [(&str, u32); 12] = [
    ("NF", 1),
    ("EZ", 2),
    ("TD", 4),
    ("HD", 8),
    ("HR", 16),
    ("SD", 32),
    ("DT", 64),
    ("RX", 128),
    ("HT", 256),
    ("NC", 576),
    ("FL", 1024),
    ("SO", 4096),
];

/// The bit that distinguishes `NC` from plain `DT`.
const NC_ONLY_BIT: u32 = 512;

/// Looks up the bit value of a single acronym (case-sensitive).
pub fn mod_bit(acronym: &str) -> Option<u32> {
    MOD_BITS
        .iter()
        .find(|(name, _)| *name == acronym)
        .map(|(_, bit)| *bit)
}

/// Mods exactly as the score provider sent them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawMods {
    List(Vec<RawMod>),
    Joined(String),
    Bits(u32),
}

/// One entry of a list-shaped mod payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawMod {
    Acronym(String),
    Tagged { acronym: String },
}

impl RawMod {
    pub fn acronym(&self) -> &str {
        match self {
            RawMod::Acronym(acronym) | RawMod::Tagged { acronym } => acronym,
        }
    }
}

/// Canonical mod set: display acronyms in insertion order plus the engine
/// bitmask derived from the recognised subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModSet {
    acronyms: Vec<String>,
    bits: u32,
}

impl ModSet {
    /// Decodes any supported mod shape. Never fails; `None` is the empty set.
    pub fn decode(raw: Option<&RawMods>) -> Self {
        match raw {
            None => Self::default(),
            Some(RawMods::List(mods)) => Self::from_acronyms(mods.iter().map(RawMod::acronym)),
            Some(RawMods::Joined(joined)) => Self::from_acronyms(joined.split_whitespace()),
            Some(RawMods::Bits(bits)) => Self::from_bits(*bits),
        }
    }

    /// Builds a set from acronyms, dropping empty entries and duplicates.
    pub fn from_acronyms<'a, I>(acronyms: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::default();

        for acronym in acronyms {
            let acronym = acronym.trim();

            if acronym.is_empty() || set.contains(acronym) {
                continue;
            }

            if let Some(bit) = mod_bit(acronym) {
                set.bits |= bit;
            }

            set.acronyms.push(acronym.to_owned());
        }

        set
    }

    /// Expands a legacy bitmask back into acronyms, in table order.
    ///
    /// Bits outside the table are dropped.
    pub fn from_bits(bits: u32) -> Self {
        let nightcore = bits & NC_ONLY_BIT != 0;

        let acronyms = MOD_BITS
            .iter()
            .filter(|(name, _)| !(nightcore && *name == "DT"))
            .filter(|(name, bit)| {
                if *name == "NC" {
                    nightcore
                } else {
                    bits & bit != 0
                }
            })
            .map(|(name, _)| *name);

        Self::from_acronyms(acronyms)
    }

    pub fn acronyms(&self) -> &[String] {
        &self.acronyms
    }

    /// Legacy bitmask understood by the performance engine.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn contains(&self, acronym: &str) -> bool {
        self.acronyms.iter().any(|a| a == acronym)
    }

    pub fn is_empty(&self) -> bool {
        self.acronyms.is_empty()
    }
}

/// Renders as `+HDDT`, or nothing for an empty set.
impl fmt::Display for ModSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.acronyms.is_empty() {
            return Ok(());
        }

        f.write_str("+")?;

        for acronym in &self.acronyms {
            f.write_str(acronym)?;
        }

        Ok(())
    }
}
