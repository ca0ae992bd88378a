//! `SQLite` implementation of [`EmployeeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use assetdesk_app::ports::EmployeeRepository;
use assetdesk_domain::employee::{Employee, EmployeeDetails, EmployeeListing, NewEmployee};
use assetdesk_domain::error::AssetDeskError;
use assetdesk_domain::id::EmployeeId;

use crate::error::StorageError;
use crate::value::{Query, bind_field, decode_field};

/// Wrapper for converting database rows into domain [`Employee`].
struct Wrapper(Employee);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Employee> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let user_id: i64 = row.try_get("user_id")?;

        Ok(Self(Employee {
            user_id: EmployeeId::new(user_id),
            details: EmployeeDetails {
                user_name: decode_field(row, "user_name")?,
                gender: decode_field(row, "gender")?,
                department_id: decode_field(row, "department_id")?,
                join_date: decode_field(row, "join_date")?,
                leave_date: decode_field(row, "leave_date")?,
                remark: decode_field(row, "remark")?,
            },
        }))
    }
}

/// Wrapper for listing rows, which carry the joined department name.
struct ListingWrapper(EmployeeListing);

impl<'r> FromRow<'r, SqliteRow> for ListingWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let Wrapper(employee) = Wrapper::from_row(row)?;
        Ok(Self(EmployeeListing {
            employee,
            department_name: decode_field(row, "department_name")?,
        }))
    }
}

/// Bind the mutable columns in the order both statements list them.
fn bind_details(query: Query<'_>, details: EmployeeDetails) -> Query<'_> {
    let query = bind_field(query, details.user_name);
    let query = bind_field(query, details.gender);
    let query = bind_field(query, details.department_id);
    let query = bind_field(query, details.join_date);
    let query = bind_field(query, details.leave_date);
    bind_field(query, details.remark)
}

const INSERT: &str = r"
    INSERT INTO employee (user_id, user_name, gender, department_id, join_date, leave_date, remark)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM employee WHERE user_id = ?";
const SELECT_ALL: &str = r"
    SELECT e.*, d.department_name
    FROM employee e
    LEFT JOIN department d ON e.department_id = d.department_id
";
const UPDATE: &str = r"
    UPDATE employee
    SET user_name = ?, gender = ?, department_id = ?, join_date = ?, leave_date = ?, remark = ?
    WHERE user_id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM employee WHERE user_id = ?";

/// `SQLite`-backed employee repository.
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn create(
        &self,
        employee: NewEmployee,
    ) -> impl Future<Output = Result<EmployeeId, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = bind_field(sqlx::query(INSERT), employee.user_id);
            let result = bind_details(query, employee.details)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            // `user_id` is the rowid, so a NULL key reads back as the one
            // the store picked.
            Ok(EmployeeId::new(result.last_insert_rowid()))
        }
    }

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<EmployeeListing>, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<ListingWrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: EmployeeId,
        details: EmployeeDetails,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            bind_details(sqlx::query(UPDATE), details)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<(), AssetDeskError>> + Send {
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
