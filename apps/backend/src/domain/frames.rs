//! Frame builder: partitions the ledger into at most ten frames.

use crate::domain::completion::is_game_over;
use crate::domain::ledger::Ledger;
use crate::domain::rules::{Pins, FRAMES};
use crate::domain::walk::{walk_regular_frames, Stop};

/// Rolls belonging to one frame: 1 or 2 for frames 1..=9, up to 3 for the tenth.
pub type Frame = Vec<Pins>;

/// Partition the ledger into frames. A game in progress yields fewer than
/// ten frames, and its last frame may be partial.
pub fn build_frames(ledger: &Ledger) -> Vec<Frame> {
    let rolls = ledger.rolls();
    let walk = walk_regular_frames(rolls);

    let mut frames: Vec<Frame> = walk
        .spans
        .iter()
        .map(|span| rolls[span.clone()].to_vec())
        .collect();

    if let Stop::Tenth { start } = walk.stop {
        if start < rolls.len() {
            frames.push(rolls[start..].iter().copied().take(3).collect());
        }
    }

    frames
}

/// 0-based index of the frame the next roll belongs to, or `None` once the
/// game is over.
pub fn current_frame_index(ledger: &Ledger) -> Option<usize> {
    if is_game_over(ledger) {
        return None;
    }
    match walk_regular_frames(ledger.rolls()).stop {
        Stop::FrameStart { frame } | Stop::SecondRoll { frame, .. } => Some(frame),
        Stop::Tenth { .. } => Some(FRAMES - 1),
    }
}
