//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::State;

use assetdesk_app::ports::{
    AccountRepository, AssignmentRepository, DepartmentRepository, DeviceRepository,
    EmployeeRepository,
};
use assetdesk_domain::device::{Device, DeviceDetails, NewDevice};
use assetdesk_domain::id::DeviceId;

use super::{DetailResponse, WriteResponse};
use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;

/// `GET /devices`
pub async fn list<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
) -> Result<Json<Vec<Device>>, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(Json(devices))
}

/// `GET /devices/{id}`
pub async fn get<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(id): IdPath<DeviceId>,
) -> Result<DetailResponse<Device>, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let device = state.device_service.find_device(id).await?;
    Ok(device.into())
}

/// `POST /devices`
pub async fn create<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    JsonBody(device): JsonBody<NewDevice>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.device_service.create_device(device).await?;
    Ok(WriteResponse::Created)
}

/// `PUT /devices/{id}`
pub async fn update<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(id): IdPath<DeviceId>,
    JsonBody(details): JsonBody<DeviceDetails>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.device_service.update_device(id, details).await?;
    Ok(WriteResponse::Done)
}

/// `DELETE /devices/{id}`
pub async fn delete<EmpR, DeptR, DevR, AsgR, AccR>(
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(id): IdPath<DeviceId>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.device_service.delete_device(id).await?;
    Ok(WriteResponse::Done)
}

/// Any other method on `/devices` or `/devices/{id}`.
pub async fn unsupported() -> ApiError {
    ApiError::MethodNotAllowed("Method not allowed")
}
