//! JSON REST handlers for device assignments.

use axum::Json;
use axum::extract::State;

use assetdesk_app::ports::{
    AccountRepository, AssignmentRepository, DepartmentRepository, DeviceRepository,
    EmployeeRepository,
};
use assetdesk_domain::assignment::{
    Assignment, AssignmentListing, AssignmentRelease, NewAssignment,
};
use assetdesk_domain::id::AssignmentId;

use super::{DetailResponse, WriteResponse};
use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;

/// `GET /assignments`, most recently assigned first.
pub async fn list<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
) -> Result<Json<Vec<AssignmentListing>>, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let assignments = state.assignment_service.list_assignments().await?;
    Ok(Json(assignments))
}

/// `GET /assignments/{id}`
pub async fn get<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(id): IdPath<AssignmentId>,
) -> Result<DetailResponse<Assignment>, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let assignment = state.assignment_service.find_assignment(id).await?;
    Ok(assignment.into())
}

/// `POST /assignments`
///
/// `assigned_at` is stamped by the server; the body only names who gets
/// which device.
pub async fn create<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    JsonBody(assignment): JsonBody<NewAssignment>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.assignment_service.assign_device(assignment).await?;
    Ok(WriteResponse::Created)
}

/// `PUT /assignments/{id}`
///
/// Sets `released_at` and `note`; a key left out of the body clears it.
pub async fn release<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(id): IdPath<AssignmentId>,
    JsonBody(release): JsonBody<AssignmentRelease>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state
        .assignment_service
        .release_assignment(id, release)
        .await?;
    Ok(WriteResponse::Done)
}

/// `DELETE /assignments/{id}`
pub async fn delete<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(id): IdPath<AssignmentId>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.assignment_service.delete_assignment(id).await?;
    Ok(WriteResponse::Done)
}

/// Any other method on `/assignments` or `/assignments/{id}`.
pub async fn unsupported() -> ApiError {
    ApiError::MethodNotAllowed("Not allowed")
}
