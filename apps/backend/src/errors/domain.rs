//! Domain-level error type used by the scoring engine and services.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use thiserror::Error;

/// Why a roll could not be appended to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidRollKind {
    /// Pin count outside 0..=10.
    OutOfRange,
    /// More pins than are left standing in the current frame.
    NotAllowed,
    /// The game has already finished.
    GameOver,
}

/// Ways a roll list built outside `Game::submit_roll` can break the frame rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedKind {
    RollOutOfRange,
    /// Two rolls of one frame knock down more than ten pins.
    FrameOverflow,
    RollAfterGameOver,
    /// Longer than the 21 rolls any finished game can hold.
    TooManyRolls,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A submitted roll was rejected; the ledger is unchanged.
    #[error("invalid roll {0:?}: {1}")]
    InvalidRoll(InvalidRollKind, String),
    /// An out-of-band ledger violates the frame rules. Indicates a caller bug.
    #[error("malformed ledger {0:?}: {1}")]
    MalformedLedger(MalformedKind, String),
}

impl DomainError {
    pub fn invalid_roll(kind: InvalidRollKind, detail: impl Into<String>) -> Self {
        Self::InvalidRoll(kind, detail.into())
    }
    pub fn malformed(kind: MalformedKind, detail: impl Into<String>) -> Self {
        Self::MalformedLedger(kind, detail.into())
    }
}
