//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod feeding_service;
pub mod playtime_service;

/// Result of replacing a record, checked by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record was replaced.
    Updated,
    /// The record no longer exists.
    NotFound,
    /// The record exists but was modified by a concurrent writer.
    Conflict,
}
