//! `SQLite` implementation of [`AccountRepository`].
//!
//! Account statements are assembled at runtime: the record's keys become the
//! column list, its values the bound parameters. Keys reach SQL only through
//! [`quote_identifier`], so a key can name any column (and an unknown one
//! fails in the store) but can never end the identifier.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, Sqlite, SqlitePool};

use assetdesk_app::ports::AccountRepository;
use assetdesk_domain::account::{AccountKind, AccountRecord};
use assetdesk_domain::error::AssetDeskError;
use assetdesk_domain::id::EmployeeId;

use crate::error::StorageError;
use crate::value::{bind_value, decode_value};

/// Quote a caller-supplied key as a `SQLite` identifier.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn insert_statement(table: &str, record: &AccountRecord) -> String {
    let columns: Vec<String> = record.keys().map(|key| quote_identifier(key)).collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        columns.join(", ")
    )
}

fn update_statement(table: &str, record: &AccountRecord) -> String {
    let assignments: Vec<String> = record
        .keys()
        .map(|key| format!("{} = ?", quote_identifier(key)))
        .collect();
    format!(
        "UPDATE {table} SET {} WHERE user_id = ?",
        assignments.join(", ")
    )
}

/// Decode a row of unknown shape into a record, column by column.
fn decode_record(row: &SqliteRow) -> Result<AccountRecord, sqlx::Error> {
    let mut record = AccountRecord::new();
    for column in row.columns() {
        let value = decode_value(row, column.ordinal())?;
        record.insert(column.name().to_string(), value);
    }
    Ok(record)
}

/// `SQLite`-backed repository over the five account tables.
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for SqliteAccountRepository {
    fn create(
        &self,
        kind: AccountKind,
        record: AccountRecord,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = insert_statement(kind.table(), &record);
            let query = record
                .into_iter()
                .fold(sqlx::query::<Sqlite>(&sql), |query, (_, value)| bind_value(query, value));
            query.execute(&pool).await.map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn get_by_user(
        &self,
        kind: AccountKind,
        user_id: EmployeeId,
    ) -> impl Future<Output = Result<Option<AccountRecord>, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!("SELECT * FROM {} WHERE user_id = ?", kind.table());
            let row = sqlx::query(&sql)
                .bind(user_id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let record = row
                .as_ref()
                .map(decode_record)
                .transpose()
                .map_err(StorageError::from)?;
            Ok(record)
        }
    }

    fn get_all(
        &self,
        kind: AccountKind,
    ) -> impl Future<Output = Result<Vec<AccountRecord>, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!(
                "SELECT a.*, e.user_name FROM {} a LEFT JOIN employee e ON a.user_id = e.user_id",
                kind.table()
            );
            let rows = sqlx::query(&sql)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let records = rows
                .iter()
                .map(decode_record)
                .collect::<Result<Vec<_>, _>>()
                .map_err(StorageError::from)?;
            Ok(records)
        }
    }

    fn update(
        &self,
        kind: AccountKind,
        user_id: EmployeeId,
        record: AccountRecord,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = update_statement(kind.table(), &record);
            let query = record
                .into_iter()
                .fold(sqlx::query::<Sqlite>(&sql), |query, (_, value)| bind_value(query, value));
            query
                .bind(user_id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn delete(
        &self,
        kind: AccountKind,
        user_id: EmployeeId,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!("DELETE FROM {} WHERE user_id = ?", kind.table());
            sqlx::query(&sql)
                .bind(user_id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use serde_json::{Value, json};

    async fn setup() -> SqliteAccountRepository {
        let db = Config::in_memory().build().await.unwrap();
        SqliteAccountRepository::new(db.pool().clone())
    }

    fn record(value: Value) -> AccountRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    #[test]
    fn should_quote_identifiers_and_double_embedded_quotes() {
        assert_eq!(quote_identifier("domain_username"), "\"domain_username\"");
        assert_eq!(
            quote_identifier("x\") VALUES (1); DROP TABLE employee; --"),
            "\"x\"\") VALUES (1); DROP TABLE employee; --\""
        );
    }

    #[test]
    fn should_build_insert_from_record_keys() {
        let sql = insert_statement(
            "domain_account",
            &record(json!({"user_id": 1, "domain_username": "alice"})),
        );
        assert_eq!(
            sql,
            "INSERT INTO domain_account (\"domain_username\", \"user_id\") VALUES (?, ?)"
        );
    }

    #[test]
    fn should_build_update_from_record_keys() {
        let sql = update_statement(
            "erp_account",
            &record(json!({"erp_role": "viewer", "remark": null})),
        );
        assert_eq!(
            sql,
            "UPDATE erp_account SET \"erp_role\" = ?, \"remark\" = ? WHERE user_id = ?"
        );
    }

    #[tokio::test]
    async fn should_roundtrip_caller_shaped_record() {
        let repo = setup().await;
        repo.create(
            AccountKind::Domain,
            record(json!({"user_id": 1, "domain_username": "alice"})),
        )
        .await
        .unwrap();

        let fetched = repo
            .get_by_user(AccountKind::Domain, EmployeeId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched["user_id"], 1);
        assert_eq!(fetched["domain_username"], "alice");
        assert!(fetched["domain_password"].is_null());
        assert!(fetched["remark"].is_null());
    }

    #[tokio::test]
    async fn should_return_none_when_account_missing() {
        let repo = setup().await;
        let result = repo
            .get_by_user(AccountKind::Bpm, EmployeeId::new(9))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_fail_in_store_when_column_is_unknown() {
        let repo = setup().await;
        let result = repo
            .create(
                AccountKind::Email,
                record(json!({"user_id": 1, "favourite_colour": "teal"})),
            )
            .await;
        assert!(matches!(result, Err(AssetDeskError::Storage(_))));
    }

    #[tokio::test]
    async fn should_keep_injection_attempt_inside_identifier() {
        let repo = setup().await;
        let result = repo
            .create(
                AccountKind::Domain,
                record(json!({"user_id) VALUES (1); DROP TABLE employee; --": 1})),
            )
            .await;
        assert!(result.is_err());

        let employees: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employee")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(employees.0, 0);
    }

    #[tokio::test]
    async fn should_list_accounts_with_employee_name() {
        let repo = setup().await;
        sqlx::query("INSERT INTO employee (user_id, user_name) VALUES (1, 'Alice')")
            .execute(&repo.pool)
            .await
            .unwrap();
        repo.create(
            AccountKind::Gmail,
            record(json!({"user_id": 1, "gmail_address": "alice@gmail.com"})),
        )
        .await
        .unwrap();
        repo.create(
            AccountKind::Gmail,
            record(json!({"user_id": 2, "gmail_address": "ghost@gmail.com"})),
        )
        .await
        .unwrap();

        let mut all = repo.get_all(AccountKind::Gmail).await.unwrap();
        all.sort_by_key(|r| r["user_id"].as_i64());

        assert_eq!(all.len(), 2);
        assert_eq!(all[0]["user_name"], "Alice");
        assert!(all[1]["user_name"].is_null());
    }

    #[tokio::test]
    async fn should_update_only_named_columns() {
        let repo = setup().await;
        repo.create(
            AccountKind::Erp,
            record(json!({"user_id": 3, "erp_username": "carol", "erp_role": "admin"})),
        )
        .await
        .unwrap();

        repo.update(
            AccountKind::Erp,
            EmployeeId::new(3),
            record(json!({"erp_role": "viewer"})),
        )
        .await
        .unwrap();

        let fetched = repo
            .get_by_user(AccountKind::Erp, EmployeeId::new(3))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched["erp_username"], "carol");
        assert_eq!(fetched["erp_role"], "viewer");
    }

    #[tokio::test]
    async fn should_bind_every_json_scalar_kind() {
        let repo = setup().await;
        repo.create(
            AccountKind::Bpm,
            record(json!({
                "user_id": 4,
                "bpm_username": 1.5,
                "bpm_password": true,
                "remark": ["a", "b"],
            })),
        )
        .await
        .unwrap();

        let fetched = repo
            .get_by_user(AccountKind::Bpm, EmployeeId::new(4))
            .await
            .unwrap()
            .unwrap();
        // Declared TEXT columns coerce numbers to text.
        assert_eq!(fetched["bpm_username"], "1.5");
        assert_eq!(fetched["bpm_password"], "1");
        assert_eq!(fetched["remark"], r#"["a","b"]"#);
    }

    #[tokio::test]
    async fn should_delete_account_and_ignore_missing_rows() {
        let repo = setup().await;
        repo.create(AccountKind::Email, record(json!({"user_id": 5})))
            .await
            .unwrap();

        repo.delete(AccountKind::Email, EmployeeId::new(5))
            .await
            .unwrap();
        repo.delete(AccountKind::Email, EmployeeId::new(5))
            .await
            .unwrap();

        assert!(
            repo.get_by_user(AccountKind::Email, EmployeeId::new(5))
                .await
                .unwrap()
                .is_none()
        );
    }
}
