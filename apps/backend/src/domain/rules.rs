use std::ops::RangeInclusive;

use crate::errors::domain::{DomainError, InvalidRollKind};

/// Pins knocked down by a single delivery (0..=10).
pub type Pins = u8;

pub const PINS: Pins = 10;
pub const FRAMES: usize = 10;
/// Frames 1..=9 share the two-roll layout; the tenth is special-cased.
pub const REGULAR_FRAMES: usize = FRAMES - 1;
/// Nine open frames plus a tenth frame with two bonus-earning rolls and one bonus roll.
pub const MAX_ROLLS: usize = 21;
pub const MAX_SCORE: u16 = 300;

pub fn valid_pin_range() -> RangeInclusive<Pins> {
    0..=PINS
}

#[inline]
pub fn is_strike(first: Pins) -> bool {
    first == PINS
}

#[inline]
pub fn is_spare(first: Pins, second: Pins) -> bool {
    !is_strike(first) && first + second == PINS
}

/// Narrow an untrusted pin count (e.g. from a request body) to `Pins`.
pub fn pins_from_input(raw: i64) -> Result<Pins, DomainError> {
    Pins::try_from(raw)
        .ok()
        .filter(|pins| valid_pin_range().contains(pins))
        .ok_or_else(|| {
            DomainError::invalid_roll(
                InvalidRollKind::OutOfRange,
                format!("pin count must be between 0 and {PINS}, got {raw}"),
            )
        })
}
