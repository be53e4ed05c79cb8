//! Single-writer game container.
//!
//! `Game` owns the ledger and is the only place rolls are appended. Hosts
//! that share a game between threads must hold it behind a lock and treat
//! `submit_roll` (validate, append, rederive) as one critical section.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::completion::is_game_over;
use crate::domain::frames::current_frame_index;
use crate::domain::ledger::Ledger;
use crate::domain::rules::{Pins, FRAMES};
use crate::domain::scoring::total_score;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::errors::domain::DomainError;

/// What an accepted roll changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    /// 0-based frame the roll was recorded in.
    pub frame: usize,
    pub game_over: bool,
    /// Game version after the roll.
    pub version: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Game {
    ledger: Ledger,
    /// Bumped on every accepted roll and every reset.
    version: u64,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a ledger validated elsewhere (see [`Ledger::from_rolls`]).
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self { ledger, version: 0 }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_over(&self) -> bool {
        is_game_over(&self.ledger)
    }

    /// Validate and append one roll. On rejection nothing changes.
    pub fn submit_roll(&mut self, pins: Pins) -> Result<RollOutcome, DomainError> {
        let frame = current_frame_index(&self.ledger).unwrap_or(FRAMES - 1);

        if let Err(err) = self.ledger.push(pins) {
            warn!(pins, frame, error = %err, "roll rejected");
            return Err(err);
        }
        self.version += 1;

        let game_over = is_game_over(&self.ledger);
        debug!(pins, frame, version = self.version, "roll recorded");
        if game_over {
            info!(
                final_score = total_score(&self.ledger),
                rolls = self.ledger.len(),
                "game complete"
            );
        }

        Ok(RollOutcome {
            frame,
            game_over,
            version: self.version,
        })
    }

    /// Start over with an empty ledger.
    pub fn reset(&mut self) {
        self.ledger = Ledger::new();
        self.version += 1;
        debug!(version = self.version, "game reset");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.ledger, self.version)
    }
}
