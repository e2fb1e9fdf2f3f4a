//! Feeding service — use-cases for managing feedings.

use tamagotchi_domain::error::{NotFoundError, TamagotchiError, ValidationError};
use tamagotchi_domain::feeding::{Feeding, FeedingDraft};
use tamagotchi_domain::id::FeedingId;

use crate::ports::{FeedingRepository, WriteOutcome};
use crate::services::UpdateOutcome;

const ENTITY: &str = "Feeding";

/// Application service for feeding CRUD operations.
pub struct FeedingService<R> {
    repo: R,
}

impl<R: FeedingRepository> FeedingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all feedings ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_feedings(&self) -> Result<Vec<Feeding>, TamagotchiError> {
        self.repo.get_all().await
    }

    /// Look up a feeding by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TamagotchiError::NotFound`] when no feeding with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_feeding(&self, id: FeedingId) -> Result<Feeding, TamagotchiError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Persist a new feeding. Any id or version in `draft` is ignored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_feeding(&self, draft: FeedingDraft) -> Result<Feeding, TamagotchiError> {
        let created = self.repo.create(draft).await?;
        tracing::debug!(id = %created.id, "feeding created");
        Ok(created)
    }

    /// Replace the feeding stored under `id` with `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`TamagotchiError::Validation`] when the id of `draft` does not
    /// match `id`, or a storage error from the repository.
    pub async fn update_feeding(
        &self,
        id: FeedingId,
        draft: FeedingDraft,
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
                    tracing::warn!(%id, "feeding update lost a concurrent write");
                    Ok(UpdateOutcome::Conflict)
                } else {
                    Ok(UpdateOutcome::NotFound)
                }
            }
        }
    }

    /// Delete a feeding by id.
    ///
    /// # Errors
    ///
    /// Returns [`TamagotchiError::NotFound`] when no feeding with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_feeding(&self, id: FeedingId) -> Result<(), TamagotchiError> {
        if self.repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id).into());
        }
        self.repo.delete(id).await?;
        tracing::debug!(%id, "feeding deleted");
        Ok(())
    }
}

fn not_found(id: FeedingId) -> NotFoundError {
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
    struct InMemoryFeedingRepo {
        store: Mutex<BTreeMap<FeedingId, Feeding>>,
        /// Pretend every conditional write loses a race.
        always_stale: bool,
    }

    impl FeedingRepository for InMemoryFeedingRepo {
        fn create(
            &self,
            draft: FeedingDraft,
        ) -> impl Future<Output = Result<Feeding, TamagotchiError>> + Send {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().next_back().map_or(1, |id| id.get() + 1);
            let feeding = draft.into_feeding(FeedingId::new(next), 1);
            store.insert(feeding.id, feeding.clone());
            async { Ok(feeding) }
        }

        fn get_by_id(
            &self,
            id: FeedingId,
        ) -> impl Future<Output = Result<Option<Feeding>, TamagotchiError>> + Send {
            let result = self.store.lock().unwrap().get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Feeding>, TamagotchiError>> + Send {
            let result: Vec<Feeding> = self.store.lock().unwrap().values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: FeedingId,
            draft: FeedingDraft,
        ) -> impl Future<Output = Result<WriteOutcome, TamagotchiError>> + Send {
            let mut store = self.store.lock().unwrap();
            let stored = store.get(&id).map(|current| current.version);
            let outcome = match stored {
                Some(current)
                    if !self.always_stale && draft.version.is_none_or(|v| v == current) =>
                {
                    store.insert(id, draft.into_feeding(id, current + 1));
                    WriteOutcome::Applied
                }
                _ => WriteOutcome::Stale,
            };
            async move { Ok(outcome) }
        }

        fn delete(
            &self,
            id: FeedingId,
        ) -> impl Future<Output = Result<(), TamagotchiError>> + Send {
            self.store.lock().unwrap().remove(&id);
            async { Ok(()) }
        }

        fn exists(
            &self,
            id: FeedingId,
        ) -> impl Future<Output = Result<bool, TamagotchiError>> + Send {
            let found = self.store.lock().unwrap().contains_key(&id);
            async move { Ok(found) }
        }
    }

    fn make_service() -> FeedingService<InMemoryFeedingRepo> {
        FeedingService::new(InMemoryFeedingRepo::default())
    }

    fn draft(amount: i64) -> FeedingDraft {
        FeedingDraft::new(SubjectId::new(1), amount)
    }

    #[tokio::test]
    async fn should_assign_id_and_return_equal_record_on_get() {
        let svc = make_service();
        let created = svc.create_feeding(draft(10)).await.unwrap();
        assert_eq!(created.id, FeedingId::new(1));

        let fetched = svc.get_feeding(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_ignore_client_supplied_id_on_create() {
        let svc = make_service();
        let created = svc
            .create_feeding(draft(1).with_id(FeedingId::new(99)))
            .await
            .unwrap();
        assert_eq!(created.id, FeedingId::new(1));
    }

    #[tokio::test]
    async fn should_list_feedings_in_id_order() {
        let svc = make_service();
        for amount in [3, 1, 2] {
            svc.create_feeding(draft(amount)).await.unwrap();
        }

        let ids: Vec<i64> = svc
            .list_feedings()
            .await
            .unwrap()
            .iter()
            .map(|f| f.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_feeding_missing() {
        let svc = make_service();
        let result = svc.get_feeding(FeedingId::new(42)).await;
        assert!(matches!(result, Err(TamagotchiError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_replace_feeding_when_ids_match() {
        let svc = make_service();
        let created = svc.create_feeding(draft(10)).await.unwrap();

        let outcome = svc
            .update_feeding(created.id, draft(20).with_id(created.id))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);

        let fetched = svc.get_feeding(created.id).await.unwrap();
        assert_eq!(fetched.amount, 20);
        assert_eq!(fetched.version, 2);
    }

    #[tokio::test]
    async fn should_reject_update_when_ids_differ_and_leave_store_untouched() {
        let svc = make_service();
        let created = svc.create_feeding(draft(10)).await.unwrap();

        let result = svc
            .update_feeding(created.id, draft(20).with_id(FeedingId::new(2)))
            .await;
        assert!(matches!(
            result,
            Err(TamagotchiError::Validation(ValidationError::IdMismatch { .. }))
        ));

        let fetched = svc.get_feeding(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_reject_update_when_body_has_no_id() {
        let svc = make_service();
        let created = svc.create_feeding(draft(10)).await.unwrap();

        let result = svc.update_feeding(created.id, draft(20)).await;
        assert!(matches!(result, Err(TamagotchiError::Validation(_))));
    }

    #[tokio::test]
    async fn should_report_not_found_when_updating_missing_feeding() {
        let svc = make_service();
        let id = FeedingId::new(5);
        let outcome = svc.update_feeding(id, draft(1).with_id(id)).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::NotFound);
    }

    #[tokio::test]
    async fn should_report_conflict_when_version_is_stale() {
        let svc = make_service();
        let created = svc.create_feeding(draft(10)).await.unwrap();
        svc.update_feeding(created.id, draft(11).with_id(created.id))
            .await
            .unwrap();

        let outcome = svc
            .update_feeding(created.id, draft(12).with_id(created.id).with_version(1))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Conflict);
        assert_eq!(svc.get_feeding(created.id).await.unwrap().amount, 11);
    }

    #[tokio::test]
    async fn should_report_conflict_when_store_rejects_write_of_existing_row() {
        let svc = FeedingService::new(InMemoryFeedingRepo {
            always_stale: true,
            ..Default::default()
        });
        let created = svc.create_feeding(draft(10)).await.unwrap();

        let outcome = svc
            .update_feeding(created.id, draft(20).with_id(created.id))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Conflict);
    }

    #[tokio::test]
    async fn should_delete_feeding() {
        let svc = make_service();
        let created = svc.create_feeding(draft(10)).await.unwrap();

        svc.delete_feeding(created.id).await.unwrap();

        let result = svc.get_feeding(created.id).await;
        assert!(matches!(result, Err(TamagotchiError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_feeding() {
        let svc = make_service();
        svc.create_feeding(draft(10)).await.unwrap();

        let result = svc.delete_feeding(FeedingId::new(7)).await;
        assert!(matches!(result, Err(TamagotchiError::NotFound(_))));
        assert_eq!(svc.list_feedings().await.unwrap().len(), 1);
    }
}
