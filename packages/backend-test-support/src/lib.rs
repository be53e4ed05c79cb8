//! Backend test support utilities
//!
//! Shared by the bowling backend's unit and integration tests: idempotent
//! logging initialization and Problem Details assertions that do not depend
//! on backend types.

pub mod logging;
pub mod problem_details;
