//! `SQLite` implementation of [`FeedingRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use tamagotchi_app::ports::{FeedingRepository, WriteOutcome};
use tamagotchi_domain::error::TamagotchiError;
use tamagotchi_domain::feeding::{Feeding, FeedingDraft};
use tamagotchi_domain::id::{FeedingId, SubjectId};
use tamagotchi_domain::time;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Feeding`].
struct Wrapper(Feeding);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let fed_at: String = row.try_get("fed_at")?;
        let fed_at =
            time::parse_rfc3339(&fed_at).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Feeding {
            id: FeedingId::new(row.try_get("id")?),
            subject_id: SubjectId::new(row.try_get("subject_id")?),
            fed_at,
            food: row.try_get("food")?,
            amount: row.try_get("amount")?,
            version: row.try_get("version")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO feedings (subject_id, fed_at, food, amount, version) VALUES (?, ?, ?, ?, 1) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM feedings WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM feedings ORDER BY id ASC";
const UPDATE: &str = r"
    UPDATE feedings
    SET subject_id = ?, fed_at = ?, food = ?, amount = ?, version = version + 1
    WHERE id = ? AND version = COALESCE(?, version)
";
const DELETE_BY_ID: &str = "DELETE FROM feedings WHERE id = ?";
const EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM feedings WHERE id = ?)";

/// `SQLite`-backed feeding repository.
pub struct SqliteFeedingRepository {
    pool: SqlitePool,
}

impl SqliteFeedingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FeedingRepository for SqliteFeedingRepository {
    async fn create(&self, draft: FeedingDraft) -> Result<Feeding, TamagotchiError> {
        let row: Wrapper = sqlx::query_as(INSERT)
            .bind(draft.subject_id.get())
            .bind(draft.fed_at.to_rfc3339())
            .bind(&draft.food)
            .bind(draft.amount)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.0)
    }

    async fn get_by_id(&self, id: FeedingId) -> Result<Option<Feeding>, TamagotchiError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<Feeding>, TamagotchiError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(
        &self,
        id: FeedingId,
        draft: FeedingDraft,
    ) -> Result<WriteOutcome, TamagotchiError> {
        let result = sqlx::query(UPDATE)
            .bind(draft.subject_id.get())
            .bind(draft.fed_at.to_rfc3339())
            .bind(&draft.food)
            .bind(draft.amount)
            .bind(id.get())
            .bind(draft.version)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(if result.rows_affected() == 0 {
            WriteOutcome::Stale
        } else {
            WriteOutcome::Applied
        })
    }

    async fn delete(&self, id: FeedingId) -> Result<(), TamagotchiError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn exists(&self, id: FeedingId) -> Result<bool, TamagotchiError> {
        let found: i64 = sqlx::query_scalar(EXISTS)
            .bind(id.get())
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(found != 0)
    }
}
