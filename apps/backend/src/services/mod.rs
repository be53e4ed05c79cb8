//! Application services sitting between HTTP handlers and the domain.

pub mod game;
pub mod summary;

pub use game::GameService;
pub use summary::{generate_summary, summarize, SummaryRequest, SummaryResponse};
