//! Shared value types used by record schemas.
//!
//! - [`Hero`] - Playable character class, decoded from a three-letter code
//! - [`ModSlot`] - One property modifier slot (code, parameter, min, max)

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// =============================================================================
// Hero
// =============================================================================

/// Playable character class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Hero {
    /// No class restriction. Also used for blank or unknown codes.
    #[default]
    None,
    Barbarian,
    Necromancer,
    Paladin,
    Assassin,
    Sorceress,
    Amazon,
    Druid,
}

static HERO_CODES: Lazy<HashMap<&'static str, Hero>> = Lazy::new(|| {
    HashMap::from([
        ("ama", Hero::Amazon),
        ("ass", Hero::Assassin),
        ("bar", Hero::Barbarian),
        ("dru", Hero::Druid),
        ("nec", Hero::Necromancer),
        ("pal", Hero::Paladin),
        ("sor", Hero::Sorceress),
    ])
});

impl Hero {
    /// Decode a class code as written in the data files.
    ///
    /// Blank and unrecognised codes map to [`Hero::None`] instead of failing
    /// the row, since several files leave the class column empty.
    pub fn from_code(code: &str) -> Self {
        HERO_CODES.get(code).copied().unwrap_or_default()
    }

    /// Three-letter code, or `""` for [`Hero::None`].
    pub fn to_code(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Barbarian => "bar",
            Self::Necromancer => "nec",
            Self::Paladin => "pal",
            Self::Assassin => "ass",
            Self::Sorceress => "sor",
            Self::Amazon => "ama",
            Self::Druid => "dru",
        }
    }
}

// =============================================================================
// Modifier Slot
// =============================================================================

/// A property modifier: a property code with its parameter and value range.
///
/// An unused slot has an empty code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ModSlot {
    /// Property code (a key into the properties table).
    pub code: String,
    pub param: i64,
    pub min: i64,
    pub max: i64,
}

impl ModSlot {
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
