//! JSON REST handlers for departments. Read and create only.

use axum::Json;
use axum::extract::State;

use assetdesk_app::ports::{
    AccountRepository, AssignmentRepository, DepartmentRepository, DeviceRepository,
    EmployeeRepository,
};
use assetdesk_domain::department::{Department, NewDepartment};
use assetdesk_domain::id::DepartmentId;

use super::{DetailResponse, WriteResponse};
use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;

/// `GET /departments`
pub async fn list<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
) -> Result<Json<Vec<Department>>, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let departments = state.department_service.list_departments().await?;
    Ok(Json(departments))
}

/// `GET /departments/{id}`
pub async fn get<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(id): IdPath<DepartmentId>,
) -> Result<DetailResponse<Department>, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let department = state.department_service.find_department(id).await?;
    Ok(department.into())
}

/// `POST /departments`
pub async fn create<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    JsonBody(department): JsonBody<NewDepartment>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.department_service.create_department(department).await?;
    Ok(WriteResponse::Created)
}

/// Any other method on `/departments` or `/departments/{id}`.
pub async fn unsupported() -> ApiError {
    ApiError::MethodNotAllowed("Not implemented")
}
