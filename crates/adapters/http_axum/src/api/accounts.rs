//! JSON REST handlers for the five account tables.
//!
//! Every handler takes [`AccountSelector`] first, so the `sub` query
//! parameter is validated before the id, the body or the method.

use axum::Json;
use axum::extract::State;

use assetdesk_app::ports::{
    AccountRepository, AssignmentRepository, DepartmentRepository, DeviceRepository,
    EmployeeRepository,
};
use assetdesk_domain::account::AccountRecord;
use assetdesk_domain::id::EmployeeId;

use super::{DetailResponse, WriteResponse};
use crate::error::ApiError;
use crate::extract::{AccountSelector, IdPath, JsonBody};
use crate::state::AppState;

/// `GET /accounts?sub={kind}`
pub async fn list<EmpR, DeptR, DevR, AsgR, AccR>(
    AccountSelector(kind): AccountSelector,
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
) -> Result<Json<Vec<AccountRecord>>, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let accounts = state.account_service.list_accounts(kind).await?;
    Ok(Json(accounts))
}

/// `GET /accounts/{user_id}?sub={kind}`
pub async fn get<EmpR, DeptR, DevR, AsgR, AccR>(
    AccountSelector(kind): AccountSelector,
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(user_id): IdPath<EmployeeId>,
) -> Result<DetailResponse<AccountRecord>, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let account = state.account_service.find_account(kind, user_id).await?;
    Ok(account.into())
}

/// `POST /accounts?sub={kind}`
///
/// The body's keys become the inserted columns.
pub async fn create<EmpR, DeptR, DevR, AsgR, AccR>(
    AccountSelector(kind): AccountSelector,
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    JsonBody(record): JsonBody<AccountRecord>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.account_service.create_account(kind, record).await?;
    Ok(WriteResponse::Created)
}

/// `PUT /accounts/{user_id}?sub={kind}`
pub async fn update<EmpR, DeptR, DevR, AsgR, AccR>(
    AccountSelector(kind): AccountSelector,
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(user_id): IdPath<EmployeeId>,
    JsonBody(record): JsonBody<AccountRecord>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state
        .account_service
        .update_account(kind, user_id, record)
        .await?;
    Ok(WriteResponse::Done)
}

/// `DELETE /accounts/{user_id}?sub={kind}`
pub async fn delete<EmpR, DeptR, DevR, AsgR, AccR>(
    AccountSelector(kind): AccountSelector,
    State(state): State<AppState<EmpR, DeptR, DevR, AsgR, AccR>>,
    IdPath(user_id): IdPath<EmployeeId>,
) -> Result<WriteResponse, ApiError>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    state.account_service.delete_account(kind, user_id).await?;
    Ok(WriteResponse::Done)
}

/// Any other method on `/accounts`; a bad selector still answers 400.
pub async fn unsupported(AccountSelector(_): AccountSelector) -> ApiError {
    ApiError::MethodNotAllowed("Method not allowed")
}
