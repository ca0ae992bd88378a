//! JSON REST API handler modules.
//!
//! Each resource answers on `/{resource}` and `/{resource}/{id}`. A method a
//! resource does not handle lands in that resource's fallback, which replies
//! 405 with the resource's own message.

#[allow(clippy::missing_errors_doc)]
pub mod accounts;
#[allow(clippy::missing_errors_doc)]
pub mod assignments;
#[allow(clippy::missing_errors_doc)]
pub mod departments;
#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod employees;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde::Serialize;
use serde_json::json;

use assetdesk_app::ports::{
    AccountRepository, AssignmentRepository, DepartmentRepository, DeviceRepository,
    EmployeeRepository,
};

use crate::state::AppState;

/// Response of a detail lookup: the row, or `{}` when nothing matched.
pub enum DetailResponse<T> {
    Found(Json<T>),
    Missing,
}

impl<T> From<Option<T>> for DetailResponse<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, |row| Self::Found(Json(row)))
    }
}

impl<T: Serialize> IntoResponse for DetailResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Found(json) => json.into_response(),
            Self::Missing => Json(json!({})).into_response(),
        }
    }
}

/// Acknowledgement of a successful write, `{"ok":true}`.
pub enum WriteResponse {
    Created,
    Done,
}

impl IntoResponse for WriteResponse {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Created => StatusCode::CREATED,
            Self::Done => StatusCode::OK,
        };
        (status, Json(json!({ "ok": true }))).into_response()
    }
}

/// Build the resource router, relative to the base path.
pub fn routes<EmpR, DeptR, DevR, AsgR, AccR>() -> Router<AppState<EmpR, DeptR, DevR, AsgR, AccR>>
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    Router::new()
        // Employees
        .route(
            "/employees",
            get(employees::list::<EmpR, DeptR, DevR, AsgR, AccR>)
                .post(employees::create::<EmpR, DeptR, DevR, AsgR, AccR>)
                .fallback(employees::unsupported),
        )
        .route(
            "/employees/{id}",
            get(employees::get::<EmpR, DeptR, DevR, AsgR, AccR>)
                .post(employees::create::<EmpR, DeptR, DevR, AsgR, AccR>)
                .put(employees::update::<EmpR, DeptR, DevR, AsgR, AccR>)
                .delete(employees::delete::<EmpR, DeptR, DevR, AsgR, AccR>)
                .fallback(employees::unsupported),
        )
        // Departments
        .route(
            "/departments",
            get(departments::list::<EmpR, DeptR, DevR, AsgR, AccR>)
                .post(departments::create::<EmpR, DeptR, DevR, AsgR, AccR>)
                .fallback(departments::unsupported),
        )
        .route(
            "/departments/{id}",
            get(departments::get::<EmpR, DeptR, DevR, AsgR, AccR>)
                .post(departments::create::<EmpR, DeptR, DevR, AsgR, AccR>)
                .fallback(departments::unsupported),
        )
        // Devices
        .route(
            "/devices",
            get(devices::list::<EmpR, DeptR, DevR, AsgR, AccR>)
                .post(devices::create::<EmpR, DeptR, DevR, AsgR, AccR>)
                .fallback(devices::unsupported),
        )
        .route(
            "/devices/{id}",
            get(devices::get::<EmpR, DeptR, DevR, AsgR, AccR>)
                .post(devices::create::<EmpR, DeptR, DevR, AsgR, AccR>)
                .put(devices::update::<EmpR, DeptR, DevR, AsgR, AccR>)
                .delete(devices::delete::<EmpR, DeptR, DevR, AsgR, AccR>)
                .fallback(devices::unsupported),
        )
        // Assignments
        .route(
            "/assignments",
            get(assignments::list::<EmpR, DeptR, DevR, AsgR, AccR>)
                .post(assignments::create::<EmpR, DeptR, DevR, AsgR, AccR>)
                .fallback(assignments::unsupported),
        )
        .route(
            "/assignments/{id}",
            get(assignments::get::<EmpR, DeptR, DevR, AsgR, AccR>)
                .post(assignments::create::<EmpR, DeptR, DevR, AsgR, AccR>)
                .put(assignments::release::<EmpR, DeptR, DevR, AsgR, AccR>)
                .delete(assignments::delete::<EmpR, DeptR, DevR, AsgR, AccR>)
                .fallback(assignments::unsupported),
        )
        // Accounts
        .route(
            "/accounts",
            get(accounts::list::<EmpR, DeptR, DevR, AsgR, AccR>)
                .post(accounts::create::<EmpR, DeptR, DevR, AsgR, AccR>)
                .fallback(accounts::unsupported),
        )
        .route(
            "/accounts/{id}",
            post(accounts::create::<EmpR, DeptR, DevR, AsgR, AccR>)
                .get(accounts::get::<EmpR, DeptR, DevR, AsgR, AccR>)
                .put(accounts::update::<EmpR, DeptR, DevR, AsgR, AccR>)
                .delete(accounts::delete::<EmpR, DeptR, DevR, AsgR, AccR>)
                .fallback(accounts::unsupported),
        )
}
