//! `SQLite` implementation of [`AssignmentRepository`].
//!
//! `assigned_at` is stored as fixed-width RFC 3339 text (microseconds, `Z`),
//! so ordering the column as text orders it chronologically. `released_at`
//! holds whatever the caller sent.

use std::future::Future;

use chrono::{DateTime, SecondsFormat};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use assetdesk_app::ports::AssignmentRepository;
use assetdesk_domain::assignment::{
    Assignment, AssignmentListing, AssignmentRelease, NewAssignment,
};
use assetdesk_domain::error::AssetDeskError;
use assetdesk_domain::id::AssignmentId;
use assetdesk_domain::time::Timestamp;

use crate::error::StorageError;
use crate::value::{bind_field, decode_field};

fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(text: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

struct Wrapper(Assignment);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let assignment_id: i64 = row.try_get("assignment_id")?;
        let assigned_at: String = row.try_get("assigned_at")?;

        Ok(Self(Assignment {
            assignment_id: AssignmentId::new(assignment_id),
            user_id: decode_field(row, "user_id")?,
            device_id: decode_field(row, "device_id")?,
            assigned_at: decode_timestamp(&assigned_at)?,
            released_at: decode_field(row, "released_at")?,
            note: decode_field(row, "note")?,
        }))
    }
}

struct ListingWrapper(AssignmentListing);

impl<'r> FromRow<'r, SqliteRow> for ListingWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let Wrapper(assignment) = Wrapper::from_row(row)?;
        Ok(Self(AssignmentListing {
            assignment,
            user_name: decode_field(row, "user_name")?,
            device_name: decode_field(row, "device_name")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO device_assignment (user_id, device_id, assigned_at, note) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM device_assignment WHERE assignment_id = ?";
const SELECT_ALL: &str = r"
    SELECT da.*, e.user_name, d.device_name
    FROM device_assignment da
    LEFT JOIN employee e ON da.user_id = e.user_id
    LEFT JOIN device d ON da.device_id = d.device_id
    ORDER BY da.assigned_at DESC
";
const RELEASE: &str =
    "UPDATE device_assignment SET released_at = ?, note = ? WHERE assignment_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM device_assignment WHERE assignment_id = ?";

/// `SQLite`-backed assignment repository.
pub struct SqliteAssignmentRepository {
    pool: SqlitePool,
}

impl SqliteAssignmentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AssignmentRepository for SqliteAssignmentRepository {
    fn create(
        &self,
        assignment: NewAssignment,
        assigned_at: Timestamp,
    ) -> impl Future<Output = Result<AssignmentId, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = bind_field(sqlx::query(INSERT), assignment.user_id);
            let query = bind_field(query, assignment.device_id).bind(encode_timestamp(assigned_at));
            let result = bind_field(query, assignment.note)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(AssignmentId::new(result.last_insert_rowid()))
        }
    }

    fn get_by_id(
        &self,
        id: AssignmentId,
    ) -> impl Future<Output = Result<Option<Assignment>, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<AssignmentListing>, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<ListingWrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn release(
        &self,
        id: AssignmentId,
        release: AssignmentRelease,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = bind_field(sqlx::query(RELEASE), release.released_at);
            bind_field(query, release.note)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn delete(
        &self,
        id: AssignmentId,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
