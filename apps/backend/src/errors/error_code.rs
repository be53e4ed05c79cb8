//! Error codes for the bowling backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in Problem Details responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Roll submission
    /// Pin count out of range or more than the pins left standing
    InvalidRoll,
    /// Roll submitted after the tenth frame closed
    GameOver,
    /// Operation needs a finished game
    GameInProgress,
    /// If-Match version no longer current
    OptimisticLock,

    // Request validation
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Invalid or missing HTTP header
    InvalidHeader,
    /// Request body larger than the configured limit
    PayloadTooLarge,

    // Resources
    NotFound,

    // System
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Stored rolls violate the frame rules
    DataCorruption,
}

impl ErrorCode {
    /// Canonical string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRoll => "INVALID_ROLL",
            Self::GameOver => "GAME_OVER",
            Self::GameInProgress => "GAME_IN_PROGRESS",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::NotFound => "NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
