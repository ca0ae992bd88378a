//! Department service: departments can be created and read, nothing more.

use assetdesk_domain::department::{Department, NewDepartment};
use assetdesk_domain::error::AssetDeskError;
use assetdesk_domain::id::DepartmentId;

use crate::ports::DepartmentRepository;

/// Application service for departments.
pub struct DepartmentService<R> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new department, returning the key it was stored under.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(
        skip(self, department),
        fields(department_id = ?department.department_id)
    )]
    pub async fn create_department(
        &self,
        department: NewDepartment,
    ) -> Result<DepartmentId, AssetDeskError> {
        self.repo.create(department).await
    }

    /// Look up a department by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_department(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, AssetDeskError> {
        self.repo.get_by_id(id).await
    }

    /// List all departments.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_departments(&self) -> Result<Vec<Department>, AssetDeskError> {
        self.repo.get_all().await
    }
}
