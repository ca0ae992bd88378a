//! Device service: use-cases for managing devices.

use assetdesk_domain::device::{Device, DeviceDetails, NewDevice};
use assetdesk_domain::error::AssetDeskError;
use assetdesk_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Application service for device CRUD operations.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new device, returning the key it was stored under.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, device), fields(device_id = ?device.device_id))]
    pub async fn create_device(&self, device: NewDevice) -> Result<DeviceId, AssetDeskError> {
        self.repo.create(device).await
    }

    /// Look up a device by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_device(&self, id: DeviceId) -> Result<Option<Device>, AssetDeskError> {
        self.repo.get_by_id(id).await
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, AssetDeskError> {
        self.repo.get_all().await
    }

    /// Overwrite the name and description of a device.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, details))]
    pub async fn update_device(
        &self,
        id: DeviceId,
        details: DeviceDetails,
    ) -> Result<(), AssetDeskError> {
        self.repo.update(id, details).await
    }

    /// Delete a device by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), AssetDeskError> {
        self.repo.delete(id).await
    }
}
