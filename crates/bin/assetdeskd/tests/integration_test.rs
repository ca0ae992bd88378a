//! End-to-end tests for the full assetdeskd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`; no TCP port is bound.

use std::time::Duration;

use assetdesk_adapter_http_axum::router;
use assetdesk_adapter_http_axum::state::AppState;
use assetdesk_adapter_storage_sqlite_sqlx::{
    Config, SqliteAccountRepository, SqliteAssignmentRepository, SqliteDepartmentRepository,
    SqliteDeviceRepository, SqliteEmployeeRepository,
};
use assetdesk_app::services::account_service::AccountService;
use assetdesk_app::services::assignment_service::AssignmentService;
use assetdesk_app::services::department_service::DepartmentService;
use assetdesk_app::services::device_service::DeviceService;
use assetdesk_app::services::employee_service::EmployeeService;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config::in_memory()
        .build()
        .await
        .expect("in-memory database should initialise");
    let pool = db.pool().clone();

    let state = AppState::new(
        EmployeeService::new(SqliteEmployeeRepository::new(pool.clone())),
        DepartmentService::new(SqliteDepartmentRepository::new(pool.clone())),
        DeviceService::new(SqliteDeviceRepository::new(pool.clone())),
        AssignmentService::new(SqliteAssignmentRepository::new(pool.clone())),
        AccountService::new(SqliteAccountRepository::new(pool)),
    );

    router::build(state, "/api")
}

/// Send one request and return its status and decoded JSON body
/// (`Value::Null` when the body is empty).
async fn call(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_answer_preflight_with_204_and_cors_headers() {
    let app = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/employees/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type, Authorization"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn should_return_404_when_resource_unknown() {
    let app = app().await;
    let (status, body) = call(&app, Method::GET, "/api/printers", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Unknown resource"}));
}

#[tokio::test]
async fn should_carry_cors_headers_on_regular_responses() {
    let app = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/devices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn should_return_empty_object_when_id_missing_for_every_resource() {
    let app = app().await;
    for uri in [
        "/api/employees/404",
        "/api/departments/404",
        "/api/devices/404",
        "/api/assignments/404",
        "/api/accounts/404?sub=email",
    ] {
        let (status, body) = call(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({}), "{uri}");
    }
}

#[tokio::test]
async fn should_return_ok_when_deleting_missing_ids() {
    let app = app().await;
    for uri in [
        "/api/employees/404",
        "/api/devices/404",
        "/api/assignments/404",
        "/api/accounts/404?sub=bpm",
    ] {
        let (status, body) = call(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({"ok": true}), "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Employees & departments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_roundtrip_every_employee_field() {
    let app = app().await;
    let employee = json!({
        "user_id": 1001,
        "user_name": "Alice",
        "gender": "F",
        "department_id": 10,
        "join_date": "2022-01-03",
        "leave_date": "2024-12-31",
        "remark": "hardware team"
    });

    let (status, body) = call(&app, Method::POST, "/api/employees", Some(employee.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"ok": true}));

    let (status, body) = call(&app, Method::GET, "/api/employees/1001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, employee);
}

#[tokio::test]
async fn should_list_employees_with_department_name() {
    let app = app().await;
    call(
        &app,
        Method::POST,
        "/api/departments",
        Some(json!({"department_id": 10, "department_name": "IT"})),
    )
    .await;
    call(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({"user_id": 1, "user_name": "Alice", "department_id": 10})),
    )
    .await;

    let (status, body) = call(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["user_name"], "Alice");
    assert_eq!(body[0]["department_name"], "IT");
}

#[tokio::test]
async fn should_overwrite_employee_on_put() {
    let app = app().await;
    call(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({"user_id": 2, "user_name": "Bob", "gender": "M"})),
    )
    .await;

    let (status, _) = call(
        &app,
        Method::PUT,
        "/api/employees/2",
        Some(json!({"user_name": "Robert"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, "/api/employees/2", None).await;
    assert_eq!(
        body,
        json!({
            "user_id": 2,
            "user_name": "Robert",
            "gender": null,
            "department_id": null,
            "join_date": null,
            "leave_date": null,
            "remark": null
        })
    );
}

#[tokio::test]
async fn should_let_store_pick_user_id_when_body_has_none() {
    let app = app().await;
    call(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({"user_id": 1, "user_name": "Alice"})),
    )
    .await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({"user_name": "Bob"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"ok": true}));

    let (_, body) = call(&app, Method::GET, "/api/employees", None).await;
    let bob = body
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["user_name"] == "Bob")
        .unwrap();
    assert_eq!(bob["user_id"], 2);
}

#[tokio::test]
async fn should_store_values_as_sent_when_types_differ() {
    let app = app().await;
    let (status, _) = call(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({"user_id": 9, "department_id": "2", "join_date": 20240101})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = call(&app, Method::GET, "/api/employees/9", None).await;
    assert_eq!(body["department_id"], 2);
    assert_eq!(body["join_date"], "20240101");
}

#[tokio::test]
async fn should_return_500_when_user_id_is_not_an_integer() {
    let app = app().await;
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({"user_id": "abc", "user_name": "Eve"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "internal server error"}));
}

#[tokio::test]
async fn should_create_department_without_id() {
    let app = app().await;
    let (status, _) = call(
        &app,
        Method::POST,
        "/api/departments",
        Some(json!({"department_name": "HR"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = call(&app, Method::GET, "/api/departments", None).await;
    assert_eq!(body, json!([{"department_id": 1, "department_name": "HR"}]));
}

#[tokio::test]
async fn should_reject_put_and_delete_on_departments() {
    let app = app().await;
    for method in [Method::PUT, Method::DELETE] {
        let (status, body) = call(&app, method, "/api/departments/1", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"error": "Not implemented"}));
    }
}

// ---------------------------------------------------------------------------
// Devices
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_support_full_device_crud() {
    let app = app().await;
    let (status, _) = call(
        &app,
        Method::POST,
        "/api/devices",
        Some(json!({"device_id": 100, "device_name": "ThinkPad", "description": "laptop"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = call(
        &app,
        Method::PUT,
        "/api/devices/100",
        Some(json!({"device_name": "ThinkPad X1", "description": "gen 11"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, "/api/devices/100", None).await;
    assert_eq!(
        body,
        json!({"device_id": 100, "device_name": "ThinkPad X1", "description": "gen 11"})
    );

    let (status, _) = call(&app, Method::DELETE, "/api/devices/100", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, "/api/devices", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_create_device_without_id() {
    let app = app().await;
    let (status, _) = call(
        &app,
        Method::POST,
        "/api/devices",
        Some(json!({"device_name": "Dock"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = call(&app, Method::GET, "/api/devices", None).await;
    assert_eq!(
        body,
        json!([{"device_id": 1, "device_name": "Dock", "description": null}])
    );
}

#[tokio::test]
async fn should_clear_device_columns_when_put_body_is_empty() {
    let app = app().await;
    call(
        &app,
        Method::POST,
        "/api/devices",
        Some(json!({"device_id": 5, "device_name": "Monitor", "description": "27 inch"})),
    )
    .await;

    let (status, _) = call(&app, Method::PUT, "/api/devices/5", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, "/api/devices/5", None).await;
    assert_eq!(
        body,
        json!({"device_id": 5, "device_name": null, "description": null})
    );
}

#[tokio::test]
async fn should_return_500_when_inserting_duplicate_device() {
    let app = app().await;
    let device = json!({"device_id": 1, "device_name": "Dock"});
    call(&app, Method::POST, "/api/devices", Some(device.clone())).await;

    let (status, body) = call(&app, Method::POST, "/api/devices", Some(device)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "internal server error"}));
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_assignments_newest_first() {
    let app = app().await;
    for device_id in [1, 2, 3] {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/assignments",
            Some(json!({"user_id": 7, "device_id": device_id})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let (status, body) = call(&app, Method::GET, "/api/assignments", None).await;
    assert_eq!(status, StatusCode::OK);
    let devices: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["device_id"].as_i64().unwrap())
        .collect();
    assert_eq!(devices, vec![3, 2, 1]);
}

#[tokio::test]
async fn should_only_touch_release_and_note_on_put() {
    let app = app().await;
    call(
        &app,
        Method::POST,
        "/api/assignments",
        Some(json!({"user_id": 7, "device_id": 3, "note": "with charger"})),
    )
    .await;
    let (_, listing) = call(&app, Method::GET, "/api/assignments", None).await;
    let id = listing[0]["assignment_id"].as_i64().unwrap();
    let (_, before) = call(&app, Method::GET, &format!("/api/assignments/{id}"), None).await;

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/api/assignments/{id}"),
        Some(json!({"note": "returned"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));

    let (_, after) = call(&app, Method::GET, &format!("/api/assignments/{id}"), None).await;
    assert_eq!(after["note"], "returned");
    assert!(after["released_at"].is_null());
    assert_eq!(after["user_id"], before["user_id"]);
    assert_eq!(after["device_id"], before["device_id"]);
    assert_eq!(after["assigned_at"], before["assigned_at"]);
}

#[tokio::test]
async fn should_create_assignment_without_user() {
    let app = app().await;
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/assignments",
        Some(json!({"device_id": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"ok": true}));

    let (_, listing) = call(&app, Method::GET, "/api/assignments", None).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);
    assert!(listing[0]["user_id"].is_null());
    assert!(listing[0]["user_name"].is_null());
    assert_eq!(listing[0]["device_id"], 3);
    assert!(listing[0]["note"].is_null());
}

#[tokio::test]
async fn should_store_release_time_as_sent() {
    let app = app().await;
    call(
        &app,
        Method::POST,
        "/api/assignments",
        Some(json!({"user_id": 7, "device_id": 3})),
    )
    .await;
    let (_, listing) = call(&app, Method::GET, "/api/assignments", None).await;
    let id = listing[0]["assignment_id"].as_i64().unwrap();

    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("/api/assignments/{id}"),
        Some(json!({"released_at": "2024-06-01 17:00:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, &format!("/api/assignments/{id}"), None).await;
    assert_eq!(body["released_at"], "2024-06-01 17:00:00");
    assert!(body["note"].is_null());
}

#[tokio::test]
async fn should_reject_unsupported_method_on_assignments() {
    let app = app().await;
    let (status, body) = call(&app, Method::PATCH, "/api/assignments/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Not allowed"}));
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_roundtrip_domain_account() {
    let app = app().await;
    let (status, _) = call(
        &app,
        Method::POST,
        "/api/accounts?sub=domain",
        Some(json!({"user_id": 1, "domain_username": "alice"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, Method::GET, "/api/accounts/1?sub=domain", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["domain_username"], "alice");
}

#[tokio::test]
async fn should_update_and_list_accounts_with_owner_name() {
    let app = app().await;
    call(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({"user_id": 3, "user_name": "Carol"})),
    )
    .await;
    call(
        &app,
        Method::POST,
        "/api/accounts?sub=erp",
        Some(json!({"user_id": 3, "erp_username": "carol", "erp_role": "admin"})),
    )
    .await;

    let (status, _) = call(
        &app,
        Method::PUT,
        "/api/accounts/3?sub=erp",
        Some(json!({"erp_role": "viewer"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, "/api/accounts?sub=erp", None).await;
    assert_eq!(body[0]["user_name"], "Carol");
    assert_eq!(body[0]["erp_username"], "carol");
    assert_eq!(body[0]["erp_role"], "viewer");
}

#[tokio::test]
async fn should_require_sub_before_anything_else() {
    let app = app().await;
    let (status, body) = call(&app, Method::PATCH, "/api/accounts/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "sub param required, e.g. ?sub=domain"}));

    let (status, body) = call(&app, Method::GET, "/api/accounts?sub=ldap", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid sub"}));
}

#[tokio::test]
async fn should_return_500_when_account_column_unknown() {
    let app = app().await;
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/accounts?sub=gmail",
        Some(json!({"user_id": 1, "shoe_size": 44})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "internal server error"}));
}

#[tokio::test]
async fn should_not_execute_injected_sql_from_account_keys() {
    let app = app().await;
    call(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({"user_id": 1, "user_name": "Alice"})),
    )
    .await;

    let (status, _) = call(
        &app,
        Method::PUT,
        "/api/accounts/1?sub=domain",
        Some(json!({"remark\" = 'x'; DELETE FROM employee; --": "boom"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, body) = call(&app, Method::GET, "/api/employees/1", None).await;
    assert_eq!(body["user_name"], "Alice");
}
