//! Game summary generation.
//!
//! Turns the rendered frames and running totals of a game into a one-line
//! text summary. Used by the stateless summarize endpoint and by the live
//! game once it has finished.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::rules::{FRAMES, PINS};
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Frames and scores as a rendering client holds them. `null` marks a roll
/// or score not yet known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub frames: Vec<Vec<Option<u16>>>,
    pub scores: Vec<Option<u16>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

impl SummaryRequest {
    /// Reject shapes no ten-frame game can produce.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.frames.len() > FRAMES {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!(
                    "A game has at most {FRAMES} frames, got {}",
                    self.frames.len()
                ),
            ));
        }
        if self.scores.len() > FRAMES {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!(
                    "A game has at most {FRAMES} scores, got {}",
                    self.scores.len()
                ),
            ));
        }
        let too_many_pins = self
            .frames
            .iter()
            .flatten()
            .flatten()
            .find(|&&pins| pins > u16::from(PINS));
        if let Some(pins) = too_many_pins {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!("A roll knocks down at most {PINS} pins, got {pins}"),
            ));
        }
        Ok(())
    }
}

/// `"The game finished with {total} points across {n} frames."`
///
/// `total` is the last score entry, or 0 when there is none or it is
/// still unresolved.
pub fn generate_summary(frames: &[Vec<Option<u16>>], scores: &[Option<u16>]) -> String {
    let total = scores.last().copied().flatten().unwrap_or(0);
    debug!(total, frames = frames.len(), "summary generated");
    format!(
        "The game finished with {total} points across {} frames.",
        frames.len()
    )
}

/// Validate then summarize.
pub fn summarize(req: &SummaryRequest) -> Result<SummaryResponse, AppError> {
    req.validate()?;
    Ok(SummaryResponse {
        summary: generate_summary(&req.frames, &req.scores),
    })
}
