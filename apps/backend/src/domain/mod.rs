//! Domain layer: the pure scoring engine for one ten-pin game.
//!
//! Every view (frames, scores, legality, completion) is a pure function of
//! the [`Ledger`]; nothing here caches derived state.

pub mod completion;
pub mod frames;
pub mod game;
pub mod ledger;
pub mod legality;
pub mod rules;
pub mod scoring;
pub mod snapshot;
mod walk;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_frames;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_legality;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use completion::is_game_over;
pub use frames::{build_frames, current_frame_index, Frame};
pub use game::{Game, RollOutcome};
pub use ledger::Ledger;
pub use legality::{allowed_next_rolls, AllowedRolls};
pub use rules::{Pins, FRAMES, MAX_ROLLS, MAX_SCORE, PINS};
pub use scoring::{cumulative_scores, total_score, FrameScores};
pub use snapshot::GameSnapshot;
