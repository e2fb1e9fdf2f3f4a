//! Playtime service — use-cases for managing playtimes.

use tamagotchi_domain::error::{NotFoundError, TamagotchiError, ValidationError};
use tamagotchi_domain::id::PlaytimeId;
use tamagotchi_domain::playtime::{Playtime, PlaytimeDraft};

use crate::ports::{PlaytimeRepository, WriteOutcome};
use crate::services::UpdateOutcome;

const ENTITY: &str = "Playtime";

/// Application service for playtime CRUD operations.
pub struct PlaytimeService<R> {
    repo: R,
}

impl<R: PlaytimeRepository> PlaytimeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all playtimes ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_playtimes(&self) -> Result<Vec<Playtime>, TamagotchiError> {
        self.repo.get_all().await
    }

    /// Look up a playtime by id.
    ///
    /// # Errors
    ///
    /// Returns [`TamagotchiError::NotFound`] when no playtime with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_playtime(&self, id: PlaytimeId) -> Result<Playtime, TamagotchiError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Persist a new playtime.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_playtime(
        &self,
        draft: PlaytimeDraft,
    ) -> Result<Playtime, TamagotchiError> {
        let created = self.repo.create(draft).await?;
        tracing::debug!(id = %created.id, "playtime created");
        Ok(created)
    }

    /// Replace the playtime stored under `id` with `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`TamagotchiError::Validation`] on an id mismatch, or a
    /// storage error from the repository.
    pub async fn update_playtime(
        &self,
        id: PlaytimeId,
        draft: PlaytimeDraft,
    ) -> Result<UpdateOutcome, TamagotchiError> {
        if draft.id != Some(id) {
            return Err(ValidationError::IdMismatch {
                entity: ENTITY,
                path: id.to_string(),
                body: draft.id.map(|body| body.to_string()),
            }
            .into());
        }

        match self.repo.update(id, draft).await? {
            WriteOutcome::Applied => Ok(UpdateOutcome::Updated),
            WriteOutcome::Stale => {
                if self.repo.exists(id).await? {
                    tracing::warn!(%id, "playtime update lost a concurrent write");
                    Ok(UpdateOutcome::Conflict)
                } else {
                    Ok(UpdateOutcome::NotFound)
                }
            }
        }
    }

    /// Delete a playtime by id.
    ///
    /// # Errors
    ///
    /// Returns [`TamagotchiError::NotFound`] when no playtime with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_playtime(&self, id: PlaytimeId) -> Result<(), TamagotchiError> {
        if self.repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id).into());
        }
        self.repo.delete(id).await?;
        tracing::debug!(%id, "playtime deleted");
        Ok(())
    }
}

fn not_found(id: PlaytimeId) -> NotFoundError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;
    use tamagotchi_domain::id::SubjectId;

    #[derive(Default)]
    struct InMemoryPlaytimeRepo {
        store: Mutex<BTreeMap<PlaytimeId, Playtime>>,
    }

    impl PlaytimeRepository for InMemoryPlaytimeRepo {
        fn create(
            &self,
            draft: PlaytimeDraft,
        ) -> impl Future<Output = Result<Playtime, TamagotchiError>> + Send {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().next_back().map_or(1, |id| id.get() + 1);
            let playtime = draft.into_playtime(PlaytimeId::new(next), 1);
            store.insert(playtime.id, playtime.clone());
            async { Ok(playtime) }
        }

        fn get_by_id(
            &self,
            id: PlaytimeId,
        ) -> impl Future<Output = Result<Option<Playtime>, TamagotchiError>> + Send {
            let result = self.store.lock().unwrap().get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Playtime>, TamagotchiError>> + Send {
            let result: Vec<Playtime> = self.store.lock().unwrap().values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: PlaytimeId,
            draft: PlaytimeDraft,
        ) -> impl Future<Output = Result<WriteOutcome, TamagotchiError>> + Send {
            let mut store = self.store.lock().unwrap();
            let stored = store.get(&id).map(|current| current.version);
            let outcome = match stored {
                Some(current) if draft.version.is_none_or(|v| v == current) => {
                    store.insert(id, draft.into_playtime(id, current + 1));
                    WriteOutcome::Applied
                }
                _ => WriteOutcome::Stale,
            };
            async move { Ok(outcome) }
        }

        fn delete(
            &self,
            id: PlaytimeId,
        ) -> impl Future<Output = Result<(), TamagotchiError>> + Send {
            self.store.lock().unwrap().remove(&id);
            async { Ok(()) }
        }

        fn exists(
            &self,
            id: PlaytimeId,
        ) -> impl Future<Output = Result<bool, TamagotchiError>> + Send {
            let found = self.store.lock().unwrap().contains_key(&id);
            async move { Ok(found) }
        }
    }

    fn make_service() -> PlaytimeService<InMemoryPlaytimeRepo> {
        PlaytimeService::new(InMemoryPlaytimeRepo::default())
    }

    fn draft(minutes: i64) -> PlaytimeDraft {
        PlaytimeDraft::new(SubjectId::new(1), minutes).with_activity("fetch")
    }

    #[tokio::test]
    async fn should_create_and_get_playtime() {
        let svc = make_service();
        let created = svc.create_playtime(draft(15)).await.unwrap();

        let fetched = svc.get_playtime(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.activity.as_deref(), Some("fetch"));
    }

    #[tokio::test]
    async fn should_update_then_delete_playtime() {
        let svc = make_service();
        let created = svc.create_playtime(draft(15)).await.unwrap();

        let outcome = svc
            .update_playtime(created.id, draft(30).with_id(created.id))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);
        assert_eq!(
            svc.get_playtime(created.id).await.unwrap().duration_minutes,
            30
        );

        svc.delete_playtime(created.id).await.unwrap();
        assert!(matches!(
            svc.get_playtime(created.id).await,
            Err(TamagotchiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_reject_update_when_ids_differ() {
        let svc = make_service();
        let created = svc.create_playtime(draft(15)).await.unwrap();

        let result = svc
            .update_playtime(created.id, draft(30).with_id(PlaytimeId::new(8)))
            .await;
        assert!(matches!(result, Err(TamagotchiError::Validation(_))));
        assert_eq!(svc.get_playtime(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_distinguish_missing_from_conflicting_updates() {
        let svc = make_service();
        let created = svc.create_playtime(draft(15)).await.unwrap();

        let conflict = svc
            .update_playtime(created.id, draft(20).with_id(created.id).with_version(9))
            .await
            .unwrap();
        assert_eq!(conflict, UpdateOutcome::Conflict);

        let missing_id = PlaytimeId::new(100);
        let missing = svc
            .update_playtime(missing_id, draft(20).with_id(missing_id))
            .await
            .unwrap();
        assert_eq!(missing, UpdateOutcome::NotFound);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_playtime() {
        let svc = make_service();
        let result = svc.delete_playtime(PlaytimeId::new(1)).await;
        assert!(matches!(result, Err(TamagotchiError::NotFound(_))));
    }
}
