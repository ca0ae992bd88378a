//! Storage port: repository traits for persistence.
//!
//! Updates and deletes report success whether or not a row matched; callers
//! cannot tell the two apart.

use std::future::Future;

use assetdesk_domain::account::{AccountKind, AccountRecord};
use assetdesk_domain::assignment::{
    Assignment, AssignmentListing, AssignmentRelease, NewAssignment,
};
use assetdesk_domain::department::{Department, NewDepartment};
use assetdesk_domain::device::{Device, DeviceDetails, NewDevice};
use assetdesk_domain::employee::{Employee, EmployeeDetails, EmployeeListing, NewEmployee};
use assetdesk_domain::error::AssetDeskError;
use assetdesk_domain::id::{AssignmentId, DepartmentId, DeviceId, EmployeeId};
use assetdesk_domain::time::Timestamp;

/// Repository for persisting and querying [`Employee`]s.
pub trait EmployeeRepository {
    /// Insert a new employee, returning the key it was stored under.
    fn create(
        &self,
        employee: NewEmployee,
    ) -> impl Future<Output = Result<EmployeeId, AssetDeskError>> + Send;

    /// Get an employee by id, without any joined columns.
    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, AssetDeskError>> + Send;

    /// Get all employees with their department name, in store order.
    fn get_all(&self)
    -> impl Future<Output = Result<Vec<EmployeeListing>, AssetDeskError>> + Send;

    /// Overwrite every mutable column of an employee.
    fn update(
        &self,
        id: EmployeeId,
        details: EmployeeDetails,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send;

    /// Delete an employee by id.
    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<(), AssetDeskError>> + Send;
}

/// Repository for creating and reading [`Department`]s.
pub trait DepartmentRepository {
    /// Insert a new department, returning the key it was stored under.
    fn create(
        &self,
        department: NewDepartment,
    ) -> impl Future<Output = Result<DepartmentId, AssetDeskError>> + Send;

    /// Get a department by id.
    fn get_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, AssetDeskError>> + Send;

    /// Get all departments, in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Department>, AssetDeskError>> + Send;
}

/// Repository for persisting and querying [`Device`]s.
pub trait DeviceRepository {
    /// Insert a new device, returning the key it was stored under.
    fn create(
        &self,
        device: NewDevice,
    ) -> impl Future<Output = Result<DeviceId, AssetDeskError>> + Send;

    /// Get a device by id.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, AssetDeskError>> + Send;

    /// Get all devices, in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, AssetDeskError>> + Send;

    /// Overwrite every mutable column of a device.
    fn update(
        &self,
        id: DeviceId,
        details: DeviceDetails,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send;

    /// Delete a device by id.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), AssetDeskError>> + Send;
}

/// Repository for device [`Assignment`]s.
pub trait AssignmentRepository {
    /// Record a new loan stamped with `assigned_at`, returning the generated id.
    fn create(
        &self,
        assignment: NewAssignment,
        assigned_at: Timestamp,
    ) -> impl Future<Output = Result<AssignmentId, AssetDeskError>> + Send;

    /// Get an assignment by id, without any joined columns.
    fn get_by_id(
        &self,
        id: AssignmentId,
    ) -> impl Future<Output = Result<Option<Assignment>, AssetDeskError>> + Send;

    /// Get all assignments with employee and device names, newest first.
    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<AssignmentListing>, AssetDeskError>> + Send;

    /// Write `released_at` and `note`, leaving every other column untouched.
    fn release(
        &self,
        id: AssignmentId,
        release: AssignmentRelease,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send;

    /// Delete an assignment by id.
    fn delete(&self, id: AssignmentId)
    -> impl Future<Output = Result<(), AssetDeskError>> + Send;
}

/// Repository for caller-shaped account rows, one table per [`AccountKind`].
///
/// Record keys are used as column names as given. Implementations must make
/// sure a key can only ever name a column.
pub trait AccountRepository {
    /// Insert a row whose columns are exactly the record's keys.
    fn create(
        &self,
        kind: AccountKind,
        record: AccountRecord,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send;

    /// Get the account of `kind` belonging to an employee.
    fn get_by_user(
        &self,
        kind: AccountKind,
        user_id: EmployeeId,
    ) -> impl Future<Output = Result<Option<AccountRecord>, AssetDeskError>> + Send;

    /// Get every account of `kind`, each with the owning employee's name.
    fn get_all(
        &self,
        kind: AccountKind,
    ) -> impl Future<Output = Result<Vec<AccountRecord>, AssetDeskError>> + Send;

    /// Set every column named by the record's keys on the employee's account.
    fn update(
        &self,
        kind: AccountKind,
        user_id: EmployeeId,
        record: AccountRecord,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send;

    /// Delete the account of `kind` belonging to an employee.
    fn delete(
        &self,
        kind: AccountKind,
        user_id: EmployeeId,
    ) -> impl Future<Output = Result<(), AssetDeskError>> + Send;
}
