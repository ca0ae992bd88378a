//! `SQLite` implementation of [`DepartmentRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use assetdesk_app::ports::DepartmentRepository;
use assetdesk_domain::department::{Department, NewDepartment};
use assetdesk_domain::error::AssetDeskError;
use assetdesk_domain::id::DepartmentId;

use crate::error::StorageError;
use crate::value::{bind_field, decode_field};

struct Wrapper(Department);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let department_id: i64 = row.try_get("department_id")?;
        Ok(Self(Department {
            department_id: DepartmentId::new(department_id),
            department_name: decode_field(row, "department_name")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO department (department_id, department_name) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM department WHERE department_id = ?";
const SELECT_ALL: &str = "SELECT * FROM department";

/// `SQLite`-backed department repository.
pub struct SqliteDepartmentRepository {
    pool: SqlitePool,
}

impl SqliteDepartmentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository {
    fn create(
        &self,
        department: NewDepartment,
    ) -> impl Future<Output = Result<DepartmentId, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = bind_field(sqlx::query(INSERT), department.department_id);
            let result = bind_field(query, department.department_name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(DepartmentId::new(result.last_insert_rowid()))
        }
    }

    fn get_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, AssetDeskError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Department>, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
