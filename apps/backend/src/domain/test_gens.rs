// Proptest generators for domain types.
// Ledgers are driven through the legality oracle, so every generated
// ledger is legal by construction.

use proptest::prelude::*;

use crate::domain::ledger::Ledger;
use crate::domain::legality::allowed_next_rolls;
use crate::domain::rules::{Pins, MAX_ROLLS, PINS};

/// Choices above `PINS` knock down everything still standing, which keeps
/// strikes and spares frequent enough to exercise the bonus paths.
fn choice() -> impl Strategy<Value = u8> {
    0..=PINS + 3
}

/// Turn raw choices into a legal ledger, stopping early if the game ends.
pub fn ledger_from_choices(choices: &[u8]) -> Ledger {
    let mut ledger = Ledger::new();
    for &c in choices {
        let Some(max) = allowed_next_rolls(&ledger).max() else {
            break;
        };
        let pins: Pins = if c > PINS { max } else { c % (max + 1) };
        #[allow(clippy::expect_used)]
        ledger.push(pins).expect("oracle-approved roll");
    }
    ledger
}

/// Any legal ledger, from empty to finished.
pub fn ledger() -> impl Strategy<Value = Ledger> {
    prop::collection::vec(choice(), 0..=MAX_ROLLS).prop_map(|c| ledger_from_choices(&c))
}

/// A finished game. Twenty-one choices always suffice.
pub fn finished_ledger() -> impl Strategy<Value = Ledger> {
    prop::collection::vec(choice(), MAX_ROLLS).prop_map(|c| ledger_from_choices(&c))
}

/// Any pin count, legal or not for a given ledger.
pub fn pins() -> impl Strategy<Value = Pins> {
    0..=PINS
}
