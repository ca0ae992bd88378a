//! Assignment service: lending devices to employees and taking them back.

use assetdesk_domain::assignment::{
    Assignment, AssignmentListing, AssignmentRelease, NewAssignment,
};
use assetdesk_domain::error::AssetDeskError;
use assetdesk_domain::id::AssignmentId;
use assetdesk_domain::time;

use crate::ports::AssignmentRepository;

/// Application service for device assignments.
pub struct AssignmentService<R> {
    repo: R,
}

impl<R: AssignmentRepository> AssignmentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lend a device to an employee, stamped with the current server time.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(
        skip(self, assignment),
        fields(user_id = ?assignment.user_id, device_id = ?assignment.device_id)
    )]
    pub async fn assign_device(
        &self,
        assignment: NewAssignment,
    ) -> Result<AssignmentId, AssetDeskError> {
        let id = self.repo.create(assignment, time::now()).await?;
        tracing::debug!(assignment_id = %id, "device assigned");
        Ok(id)
    }

    /// Look up an assignment by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_assignment(
        &self,
        id: AssignmentId,
    ) -> Result<Option<Assignment>, AssetDeskError> {
        self.repo.get_by_id(id).await
    }

    /// List all assignments, most recently assigned first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_assignments(&self) -> Result<Vec<AssignmentListing>, AssetDeskError> {
        self.repo.get_all().await
    }

    /// Set the release time and note of an assignment.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, release))]
    pub async fn release_assignment(
        &self,
        id: AssignmentId,
        release: AssignmentRelease,
    ) -> Result<(), AssetDeskError> {
        self.repo.release(id, release).await
    }

    /// Delete an assignment by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_assignment(&self, id: AssignmentId) -> Result<(), AssetDeskError> {
        self.repo.delete(id).await
    }
}
