use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::game::Game;

/// The live game, shared between workers. Every mutation holds the lock for
/// the whole validate, append, rederive sequence.
pub type SharedGame = Arc<Mutex<Game>>;

/// Application state containing shared resources
#[derive(Debug, Clone, Default)]
pub struct AppState {
    game: SharedGame,
}

impl AppState {
    pub fn new(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    pub fn game(&self) -> &SharedGame {
        &self.game
    }
}
