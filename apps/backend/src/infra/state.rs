use crate::domain::game::Game;
use crate::domain::ledger::Ledger;
use crate::domain::rules::Pins;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    rolls: Vec<Pins>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { rolls: Vec::new() }
    }

    /// Resume from an existing roll list. It is replayed through the
    /// legality rules when the state is built.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = Pins>) -> Self {
        self.rolls = rolls.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let ledger = Ledger::from_rolls(self.rolls)?;
        Ok(AppState::new(Game::from_ledger(ledger)))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
