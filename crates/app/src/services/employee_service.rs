//! Employee service: use-cases for managing employees.

use assetdesk_domain::employee::{Employee, EmployeeDetails, EmployeeListing, NewEmployee};
use assetdesk_domain::error::AssetDeskError;
use assetdesk_domain::id::EmployeeId;

use crate::ports::EmployeeRepository;

/// Application service for employee CRUD operations.
pub struct EmployeeService<R> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new employee, returning the key it was stored under.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository, e.g. when the
    /// `user_id` is already taken.
    #[tracing::instrument(skip(self, employee), fields(user_id = ?employee.user_id))]
    pub async fn create_employee(
        &self,
        employee: NewEmployee,
    ) -> Result<EmployeeId, AssetDeskError> {
        let id = self.repo.create(employee).await?;
        tracing::debug!(user_id = %id, "employee created");
        Ok(id)
    }

    /// Look up an employee by id. A missing employee is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_employee(&self, id: EmployeeId) -> Result<Option<Employee>, AssetDeskError> {
        self.repo.get_by_id(id).await
    }

    /// List all employees with their department names.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_employees(&self) -> Result<Vec<EmployeeListing>, AssetDeskError> {
        self.repo.get_all().await
    }

    /// Overwrite every mutable column of an employee.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, details))]
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        details: EmployeeDetails,
    ) -> Result<(), AssetDeskError> {
        self.repo.update(id, details).await
    }

    /// Delete an employee by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), AssetDeskError> {
        self.repo.delete(id).await
    }
}
