//! The roll ledger: the only persisted fact about a game.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{Pins, MAX_ROLLS, PINS};
use crate::domain::walk::next_roll_ceiling;
use crate::errors::domain::{DomainError, InvalidRollKind, MalformedKind};

/// Append-only sequence of rolls.
///
/// Every `Ledger` value obeys the frame rules: rolls only enter through
/// [`Ledger::push`] or [`Ledger::from_rolls`], both of which consult the
/// legality oracle first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pins>", into = "Vec<Pins>")]
pub struct Ledger {
    rolls: Vec<Pins>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            rolls: Vec::with_capacity(MAX_ROLLS),
        }
    }

    /// Rebuild a ledger from rolls recorded elsewhere.
    ///
    /// Replays each roll through the legality check and fails hard on the
    /// first one that could not have been submitted, rather than clamping it.
    pub fn from_rolls(rolls: impl IntoIterator<Item = Pins>) -> Result<Self, DomainError> {
        let mut ledger = Self::new();
        for (idx, pins) in rolls.into_iter().enumerate() {
            if let Err(kind) = ledger.admit(pins) {
                let (kind, detail) = match kind {
                    InvalidRollKind::OutOfRange => (
                        MalformedKind::RollOutOfRange,
                        format!("roll {idx} knocks down {pins} pins"),
                    ),
                    InvalidRollKind::GameOver if idx >= MAX_ROLLS => (
                        MalformedKind::TooManyRolls,
                        format!("a game holds at most {MAX_ROLLS} rolls"),
                    ),
                    InvalidRollKind::GameOver => (
                        MalformedKind::RollAfterGameOver,
                        format!("roll {idx} follows a finished game"),
                    ),
                    InvalidRollKind::NotAllowed => (
                        MalformedKind::FrameOverflow,
                        format!("roll {idx} of {pins} exceeds the pins left standing"),
                    ),
                };
                return Err(DomainError::malformed(kind, detail));
            }
            ledger.rolls.push(pins);
        }
        Ok(ledger)
    }

    pub fn rolls(&self) -> &[Pins] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Append one roll if the oracle allows it; otherwise leave the ledger untouched.
    pub fn push(&mut self, pins: Pins) -> Result<(), DomainError> {
        self.admit(pins).map_err(|kind| {
            let detail = match kind {
                InvalidRollKind::OutOfRange => {
                    format!("pin count must be between 0 and {PINS}, got {pins}")
                }
                InvalidRollKind::GameOver => "the game is over".to_string(),
                InvalidRollKind::NotAllowed => format!(
                    "{pins} pins exceeds the {} left standing",
                    next_roll_ceiling(&self.rolls).unwrap_or_default()
                ),
            };
            DomainError::invalid_roll(kind, detail)
        })?;
        self.rolls.push(pins);
        Ok(())
    }

    fn admit(&self, pins: Pins) -> Result<(), InvalidRollKind> {
        if pins > PINS {
            return Err(InvalidRollKind::OutOfRange);
        }
        match next_roll_ceiling(&self.rolls) {
            None => Err(InvalidRollKind::GameOver),
            Some(ceiling) if pins > ceiling => Err(InvalidRollKind::NotAllowed),
            Some(_) => Ok(()),
        }
    }
}

impl TryFrom<Vec<Pins>> for Ledger {
    type Error = DomainError;

    fn try_from(rolls: Vec<Pins>) -> Result<Self, Self::Error> {
        Self::from_rolls(rolls)
    }
}

impl From<Ledger> for Vec<Pins> {
    fn from(ledger: Ledger) -> Self {
        ledger.rolls
    }
}
