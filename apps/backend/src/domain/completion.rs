//! Completion check.

use crate::domain::ledger::Ledger;
use crate::domain::walk::next_roll_ceiling;

/// True once the tenth frame is closed: a strike followed by two more rolls,
/// a spare followed by its bonus roll, or an open frame.
///
/// Shares its case analysis with [`crate::domain::legality::allowed_next_rolls`],
/// so the game is over exactly when no roll is allowed.
pub fn is_game_over(ledger: &Ledger) -> bool {
    next_roll_ceiling(ledger.rolls()).is_none()
}
