//! Shared application state for axum handlers.

use std::sync::Arc;

use assetdesk_app::ports::{
    AccountRepository, AssignmentRepository, DepartmentRepository, DeviceRepository,
    EmployeeRepository,
};
use assetdesk_app::services::account_service::AccountService;
use assetdesk_app::services::assignment_service::AssignmentService;
use assetdesk_app::services::department_service::DepartmentService;
use assetdesk_app::services::device_service::DeviceService;
use assetdesk_app::services::employee_service::EmployeeService;

/// Application state shared across all axum handlers.
///
/// Generic over one repository type per resource to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<EmpR, DeptR, DevR, AsgR, AccR> {
    /// Employee CRUD service.
    pub employee_service: Arc<EmployeeService<EmpR>>,
    /// Department create/read service.
    pub department_service: Arc<DepartmentService<DeptR>>,
    /// Device CRUD service.
    pub device_service: Arc<DeviceService<DevR>>,
    /// Device assignment service.
    pub assignment_service: Arc<AssignmentService<AsgR>>,
    /// Account service shared by every account kind.
    pub account_service: Arc<AccountService<AccR>>,
}

impl<EmpR, DeptR, DevR, AsgR, AccR> Clone for AppState<EmpR, DeptR, DevR, AsgR, AccR> {
    fn clone(&self) -> Self {
        Self {
            employee_service: Arc::clone(&self.employee_service),
            department_service: Arc::clone(&self.department_service),
            device_service: Arc::clone(&self.device_service),
            assignment_service: Arc::clone(&self.assignment_service),
            account_service: Arc::clone(&self.account_service),
        }
    }
}

impl<EmpR, DeptR, DevR, AsgR, AccR> AppState<EmpR, DeptR, DevR, AsgR, AccR>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        employee_service: EmployeeService<EmpR>,
        department_service: DepartmentService<DeptR>,
        device_service: DeviceService<DevR>,
        assignment_service: AssignmentService<AsgR>,
        account_service: AccountService<AccR>,
    ) -> Self {
        Self {
            employee_service: Arc::new(employee_service),
            department_service: Arc::new(department_service),
            device_service: Arc::new(device_service),
            assignment_service: Arc::new(assignment_service),
            account_service: Arc::new(account_service),
        }
    }
}
