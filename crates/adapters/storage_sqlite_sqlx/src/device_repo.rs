//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use assetdesk_app::ports::DeviceRepository;
use assetdesk_domain::device::{Device, DeviceDetails, NewDevice};
use assetdesk_domain::error::AssetDeskError;
use assetdesk_domain::id::DeviceId;

use crate::error::StorageError;
use crate::value::{bind_field, decode_field};

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let device_id: i64 = row.try_get("device_id")?;

        Ok(Self(Device {
            device_id: DeviceId::new(device_id),
            details: DeviceDetails {
                device_name: decode_field(row, "device_name")?,
                description: decode_field(row, "description")?,
            },
        }))
    }
}

const INSERT: &str = "INSERT INTO device (device_id, device_name, description) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM device WHERE device_id = ?";
const SELECT_ALL: &str = "SELECT * FROM device";
const UPDATE: &str = "UPDATE device SET device_name = ?, description = ? WHERE device_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM device WHERE device_id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn create(
        &self,
        device: NewDevice,
    ) -> impl Future<Output = Result<DeviceId, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let NewDevice { device_id, details } = device;
            let query = bind_field(sqlx::query(INSERT), device_id);
            let query = bind_field(query, details.device_name);
            let result = bind_field(query, details.description)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(DeviceId::new(result.last_insert_rowid()))
        }
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, AssetDeskError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: DeviceId,
        details: DeviceDetails,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = bind_field(sqlx::query(UPDATE), details.device_name);
            bind_field(query, details.description)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), AssetDeskError>> + Send {
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
