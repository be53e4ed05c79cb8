//! Legality oracle: which pin counts the next roll may take.

use serde::ser::{Serialize, Serializer};

use crate::domain::ledger::Ledger;
use crate::domain::rules::Pins;
use crate::domain::walk::next_roll_ceiling;

/// Contiguous set `0..=max` of acceptable pin counts, or the empty set once
/// the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowedRolls {
    ceiling: Option<Pins>,
}

impl AllowedRolls {
    pub const NONE: Self = Self { ceiling: None };

    pub const fn up_to(max: Pins) -> Self {
        Self { ceiling: Some(max) }
    }

    pub fn is_empty(&self) -> bool {
        self.ceiling.is_none()
    }

    /// Largest acceptable pin count.
    pub fn max(&self) -> Option<Pins> {
        self.ceiling
    }

    pub fn contains(&self, pins: Pins) -> bool {
        self.ceiling.is_some_and(|max| pins <= max)
    }

    pub fn iter(&self) -> impl Iterator<Item = Pins> {
        self.ceiling.into_iter().flat_map(|max| 0..=max)
    }

    pub fn to_vec(&self) -> Vec<Pins> {
        self.iter().collect()
    }
}

impl Serialize for AllowedRolls {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Pin counts acceptable as the next roll. Empty iff the game is over.
pub fn allowed_next_rolls(ledger: &Ledger) -> AllowedRolls {
    AllowedRolls {
        ceiling: next_roll_ceiling(ledger.rolls()),
    }
}
