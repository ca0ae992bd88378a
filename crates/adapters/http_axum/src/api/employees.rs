//! JSON REST handlers for employees.

use axum::Json;
use axum::extract::State;

use assetdesk_app::ports::{
    AccountRepository, AssignmentRepository, DepartmentRepository, DeviceRepository,
    EmployeeRepository,
};
use assetdesk_domain::employee::{Employee, EmployeeDetails, EmployeeListing, NewEmployee};
use assetdesk_domain::id::EmployeeId;

use super::{DetailResponse, WriteResponse};
use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;

/// `GET /employees`
pub async fn list<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
) -> Result<Json<Vec<EmployeeListing>>, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(employees))
}

/// `GET /employees/{id}`
pub async fn get<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(id): IdPath<EmployeeId>,
) -> Result<DetailResponse<Employee>, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let employee = state.employee_service.find_employee(id).await?;
    Ok(employee.into())
}

/// `POST /employees`
///
/// Also mounted on `/employees/{id}`; the segment is ignored and `user_id`
/// comes from the body.
pub async fn create<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    JsonBody(employee): JsonBody<NewEmployee>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.employee_service.create_employee(employee).await?;
    Ok(WriteResponse::Created)
}

/// `PUT /employees/{id}`
pub async fn update<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(id): IdPath<EmployeeId>,
    JsonBody(details): JsonBody<EmployeeDetails>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.employee_service.update_employee(id, details).await?;
    Ok(WriteResponse::Done)
}

/// `DELETE /employees/{id}`
pub async fn delete<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(id): IdPath<EmployeeId>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.employee_service.delete_employee(id).await?;
    Ok(WriteResponse::Done)
}

/// Any other method on `/employees` or `/employees/{id}`.
pub async fn unsupported() -> ApiError {
    ApiError::MethodNotAllowed("Method not allowed")
}
