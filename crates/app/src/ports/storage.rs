//! Storage port — repository traits for persistence.

use std::future::Future;

use tamagotchi_domain::error::TamagotchiError;
use tamagotchi_domain::feeding::{Feeding, FeedingDraft};
use tamagotchi_domain::id::{FeedingId, PlaytimeId};
use tamagotchi_domain::playtime::{Playtime, PlaytimeDraft};

/// Result of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The row was replaced.
    Applied,
    /// No row matched the id (and version, when one was given).
    Stale,
}

/// Repository for persisting and querying [`Feeding`]s.
pub trait FeedingRepository {
    /// Insert a new feeding; the store assigns its id.
    fn create(
        &self,
        draft: FeedingDraft,
    ) -> impl Future<Output = Result<Feeding, TamagotchiError>> + Send;

    /// Get a feeding by its identifier.
    fn get_by_id(
        &self,
        id: FeedingId,
    ) -> impl Future<Output = Result<Option<Feeding>, TamagotchiError>> + Send;

    /// Get all feedings ordered by id ascending.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Feeding>, TamagotchiError>> + Send;

    /// Replace the feeding stored under `id` with `draft`.
    ///
    /// When `draft.version` is set the write only applies if it matches the
    /// stored version.
    fn update(
        &self,
        id: FeedingId,
        draft: FeedingDraft,
    ) -> impl Future<Output = Result<WriteOutcome, TamagotchiError>> + Send;

    /// Delete a feeding by its identifier.
    fn delete(&self, id: FeedingId) -> impl Future<Output = Result<(), TamagotchiError>> + Send;

    /// Whether a feeding with `id` exists.
    fn exists(&self, id: FeedingId) -> impl Future<Output = Result<bool, TamagotchiError>> + Send;
}

/// Repository for persisting and querying [`Playtime`]s.
pub trait PlaytimeRepository {
    /// Insert a new playtime; the store assigns its id.
    fn create(
        &self,
        draft: PlaytimeDraft,
    ) -> impl Future<Output = Result<Playtime, TamagotchiError>> + Send;

    /// Get a playtime by its identifier.
    fn get_by_id(
        &self,
        id: PlaytimeId,
    ) -> impl Future<Output = Result<Option<Playtime>, TamagotchiError>> + Send;

    /// Get all playtimes ordered by id ascending.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Playtime>, TamagotchiError>> + Send;

    /// Replace the playtime stored under `id` with `draft`.
    fn update(
        &self,
        id: PlaytimeId,
        draft: PlaytimeDraft,
    ) -> impl Future<Output = Result<WriteOutcome, TamagotchiError>> + Send;

    /// Delete a playtime by its identifier.
    fn delete(&self, id: PlaytimeId)
    -> impl Future<Output = Result<(), TamagotchiError>> + Send;

    /// Whether a playtime with `id` exists.
    fn exists(&self, id: PlaytimeId)
    -> impl Future<Output = Result<bool, TamagotchiError>> + Send;
}
