//! Public snapshot API: the observable state handed to rendering hosts.

use serde::Serialize;

use crate::domain::completion::is_game_over;
use crate::domain::frames::{build_frames, current_frame_index, Frame};
use crate::domain::ledger::Ledger;
use crate::domain::legality::{allowed_next_rolls, AllowedRolls};
use crate::domain::rules::Pins;
use crate::domain::scoring::{cumulative_scores, FrameScores};

/// Everything derivable from a ledger, recomputed wholesale on every call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub rolls: Vec<Pins>,
    pub frames: Vec<Frame>,
    pub scores: FrameScores,
    pub game_over: bool,
    /// Pin counts the next roll may take; empty once the game is over.
    pub allowed: AllowedRolls,
    /// Frame receiving the next roll (0-based); `None` once the game is over.
    pub current_frame: Option<usize>,
    /// Mutation counter of the game this was taken from.
    pub version: u64,
}

pub fn snapshot(ledger: &Ledger, version: u64) -> GameSnapshot {
    GameSnapshot {
        rolls: ledger.rolls().to_vec(),
        frames: build_frames(ledger),
        scores: cumulative_scores(ledger),
        game_over: is_game_over(ledger),
        allowed: allowed_next_rolls(ledger),
        current_frame: current_frame_index(ledger),
        version,
    }
}
