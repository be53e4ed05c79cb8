//! ETag helpers for optimistic concurrency control.
//!
//! The live game's mutation counter is exposed as an ETag so clients can
//! make conditional reads (`If-None-Match`) and guarded writes (`If-Match`).

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Generate the ETag for the live game.
///
/// Format: `"game-v{version}"` (with quotes, as required by HTTP)
///
/// # Example
/// ```
/// # use bowling_backend::http::etag::game_etag;
/// assert_eq!(game_etag(5), r#""game-v5""#);
/// ```
pub fn game_etag(version: u64) -> String {
    format!(r#""game-v{version}""#)
}

/// Parse the game version from an ETag value.
///
/// Accepts `"game-v{version}"` with or without quotes, and the weak form
/// `W/"game-v{version}"`.
///
/// # Errors
/// Returns `AppError::bad_request` with `ErrorCode::InvalidHeader` if the
/// marker is missing or the version is not an unsigned integer.
pub fn parse_game_version_from_etag(s: &str) -> Result<u64, AppError> {
    let s = s.trim();
    let s = s.strip_prefix("W/").unwrap_or(s).trim_matches('"');

    let version_str = s.strip_prefix("game-v").ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("Invalid ETag format: expected \"game-v{{version}}\", got: \"{s}\""),
        )
    })?;

    version_str.parse::<u64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("Invalid ETag format: version must be a valid integer, got: \"{version_str}\""),
        )
    })
}

/// True when an `If-None-Match` value names the current version (or is `*`).
pub fn if_none_match_hits(header: &str, version: u64) -> bool {
    header.split(',').map(str::trim).any(|tag| {
        tag == "*"
            || parse_game_version_from_etag(tag)
                .map(|v| v == version)
                .unwrap_or(false)
    })
}
