//! Live game service.
//!
//! Wraps the shared [`Game`] and performs every read and mutation inside a
//! single lock acquisition, including the optimistic version check.

use tracing::{debug, info};

use crate::domain::game::Game;
use crate::domain::rules::pins_from_input;
use crate::domain::snapshot::GameSnapshot;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::summary::{generate_summary, SummaryResponse};
use crate::state::app_state::{AppState, SharedGame};

pub struct GameService {
    game: SharedGame,
}

impl GameService {
    pub fn new(game: SharedGame) -> Self {
        Self { game }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.game().clone())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.lock().snapshot()
    }

    /// Record one roll and return the resulting snapshot.
    ///
    /// `pins` is the raw client value so negative and oversized numbers
    /// surface as invalid rolls rather than parse errors. When
    /// `expected_version` is given it must equal the current version.
    pub fn submit_roll(
        &self,
        pins: i64,
        expected_version: Option<u64>,
    ) -> Result<GameSnapshot, AppError> {
        let mut game = self.game.lock();
        ensure_version(&game, expected_version)?;

        let pins = pins_from_input(pins)?;
        let outcome = game.submit_roll(pins)?;
        debug!(
            frame = outcome.frame,
            version = outcome.version,
            game_over = outcome.game_over,
            "roll accepted"
        );

        Ok(game.snapshot())
    }

    /// Clear the ledger and return the empty snapshot.
    pub fn reset(&self, expected_version: Option<u64>) -> Result<GameSnapshot, AppError> {
        let mut game = self.game.lock();
        ensure_version(&game, expected_version)?;

        game.reset();
        info!(version = game.version(), "game reset");

        Ok(game.snapshot())
    }

    /// Summary of the live game. Only available once the game is over.
    pub fn summary(&self) -> Result<SummaryResponse, AppError> {
        let snapshot = {
            let game = self.game.lock();
            if !game.is_over() {
                return Err(AppError::conflict(
                    ErrorCode::GameInProgress,
                    "The game is still in progress",
                ));
            }
            game.snapshot()
        };

        let frames: Vec<Vec<Option<u16>>> = snapshot
            .frames
            .iter()
            .map(|frame| frame.iter().map(|&pins| Some(u16::from(pins))).collect())
            .collect();

        Ok(SummaryResponse {
            summary: generate_summary(&frames, &snapshot.scores),
        })
    }
}

fn ensure_version(game: &Game, expected: Option<u64>) -> Result<(), AppError> {
    match expected {
        Some(expected) if expected != game.version() => Err(AppError::conflict(
            ErrorCode::OptimisticLock,
            format!(
                "Game was modified: expected version {expected}, current version {}",
                game.version()
            ),
        )),
        _ => Ok(()),
    }
}
