//! Frame walk shared by the frame builder, the legality oracle, and the
//! completion check. Every question about "where does the next roll go"
//! is answered here so those three can never disagree.

use std::ops::Range;

use crate::domain::rules::{is_spare, is_strike, Pins, PINS, REGULAR_FRAMES};

/// Where the walk over frames 1..=9 ran out of rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stop {
    /// The next roll opens regular frame `frame` (0-based).
    FrameStart { frame: usize },
    /// Regular frame `frame` holds `first`; its second roll is pending.
    SecondRoll { frame: usize, first: Pins },
    /// Frames 1..=9 are complete; tenth-frame rolls begin at `start`.
    Tenth { start: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Walk {
    /// Ledger spans of every regular frame with at least one roll.
    pub spans: Vec<Range<usize>>,
    pub stop: Stop,
}

pub(crate) fn walk_regular_frames(rolls: &[Pins]) -> Walk {
    let mut spans = Vec::with_capacity(REGULAR_FRAMES);
    let mut i = 0;

    for frame in 0..REGULAR_FRAMES {
        let Some(&first) = rolls.get(i) else {
            return Walk {
                spans,
                stop: Stop::FrameStart { frame },
            };
        };
        if is_strike(first) {
            spans.push(i..i + 1);
            i += 1;
            continue;
        }
        if i + 1 >= rolls.len() {
            spans.push(i..i + 1);
            return Walk {
                spans,
                stop: Stop::SecondRoll { frame, first },
            };
        }
        spans.push(i..i + 2);
        i += 2;
    }

    Walk {
        spans,
        stop: Stop::Tenth { start: i },
    }
}

/// Highest pin count the next tenth-frame roll may take, or `None` once the
/// tenth frame is complete.
///
/// A fresh rack is set after a strike or a spare; otherwise the roll is
/// capped by the pins still standing.
pub(crate) fn tenth_frame_ceiling(tenth: &[Pins]) -> Option<Pins> {
    match *tenth {
        [] => Some(PINS),
        [first] if is_strike(first) => Some(PINS),
        [first] => Some(PINS - first),
        [first, second] if is_strike(first) => {
            if is_strike(second) {
                Some(PINS)
            } else {
                Some(PINS - second)
            }
        }
        [first, second] if is_spare(first, second) => Some(PINS),
        // Open tenth frame, or all three rolls taken.
        _ => None,
    }
}

/// Ceiling for the roll after `rolls`; `None` means the game is over.
pub(crate) fn next_roll_ceiling(rolls: &[Pins]) -> Option<Pins> {
    match walk_regular_frames(rolls).stop {
        Stop::FrameStart { .. } => Some(PINS),
        Stop::SecondRoll { first, .. } => Some(PINS - first),
        Stop::Tenth { start } => tenth_frame_ceiling(&rolls[start..]),
    }
}
