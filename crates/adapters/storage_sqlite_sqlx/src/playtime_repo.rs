//! `SQLite` implementation of [`PlaytimeRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use tamagotchi_app::ports::{PlaytimeRepository, WriteOutcome};
use tamagotchi_domain::error::TamagotchiError;
use tamagotchi_domain::id::{PlaytimeId, SubjectId};
use tamagotchi_domain::playtime::{Playtime, PlaytimeDraft};
use tamagotchi_domain::time;

use crate::error::StorageError;

struct Wrapper(Playtime);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let played_at: String = row.try_get("played_at")?;
        let played_at =
            time::parse_rfc3339(&played_at).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Playtime {
            id: PlaytimeId::new(row.try_get("id")?),
            subject_id: SubjectId::new(row.try_get("subject_id")?),
            played_at,
            activity: row.try_get("activity")?,
            duration_minutes: row.try_get("duration_minutes")?,
            version: row.try_get("version")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO playtimes (subject_id, played_at, activity, duration_minutes, version) VALUES (?, ?, ?, ?, 1) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM playtimes WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM playtimes ORDER BY id ASC";
const UPDATE: &str = r"
    UPDATE playtimes
    SET subject_id = ?, played_at = ?, activity = ?, duration_minutes = ?, version = version + 1
    WHERE id = ? AND version = COALESCE(?, version)
";
const DELETE_BY_ID: &str = "DELETE FROM playtimes WHERE id = ?";
const EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM playtimes WHERE id = ?)";

/// `SQLite`-backed playtime repository.
pub struct SqlitePlaytimeRepository {
    pool: SqlitePool,
}

impl SqlitePlaytimeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaytimeRepository for SqlitePlaytimeRepository {
    async fn create(&self, draft: PlaytimeDraft) -> Result<Playtime, TamagotchiError> {
        let row: Wrapper = sqlx::query_as(INSERT)
            .bind(draft.subject_id.get())
            .bind(draft.played_at.to_rfc3339())
            .bind(&draft.activity)
            .bind(draft.duration_minutes)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.0)
    }

    async fn get_by_id(&self, id: PlaytimeId) -> Result<Option<Playtime>, TamagotchiError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<Playtime>, TamagotchiError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(
        &self,
        id: PlaytimeId,
        draft: PlaytimeDraft,
    ) -> Result<WriteOutcome, TamagotchiError> {
        let result = sqlx::query(UPDATE)
            .bind(draft.subject_id.get())
            .bind(draft.played_at.to_rfc3339())
            .bind(&draft.activity)
            .bind(draft.duration_minutes)
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

    async fn delete(&self, id: PlaytimeId) -> Result<(), TamagotchiError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn exists(&self, id: PlaytimeId) -> Result<bool, TamagotchiError> {
        let found: i64 = sqlx::query_scalar(EXISTS)
            .bind(id.get())
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(found != 0)
    }
}
