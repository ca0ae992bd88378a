//! Axum router assembly.

use axum::Router;
use axum::extract::Request;
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderValue, Method, StatusCode, Uri, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use tower::Layer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use assetdesk_app::ports::{
    AccountRepository, AssignmentRepository, DepartmentRepository, DeviceRepository,
    EmployeeRepository,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Resource routes are mounted under `base_path` (merged at the root when it
/// is empty or `/`). Empty path segments are dropped before routing, so
/// `//employees//5/` reaches the same handler as `/employees/5`. `OPTIONS`
/// is answered with 204 before routing, every response carries the CORS
/// headers, and a [`TraceLayer`] logs each request/response at `DEBUG`.
pub fn build<EmpR, DeptR, DevR, AsgR, AccR>(
    state: AppState<EmpR, DeptR, DevR, AsgR, AccR>,
    base_path: &str,
) -> Router
where
    EmpR: EmployeeRepository + Send + Sync + 'static,
    DeptR: DepartmentRepository + Send + Sync + 'static,
    DevR: DeviceRepository + Send + Sync + 'static,
    AsgR: AssignmentRepository + Send + Sync + 'static,
    AccR: AccountRepository + Send + Sync + 'static,
{
    let resources = crate::api::routes().fallback(unknown_resource);
    let base = collapse_segments(base_path);
    let routes = if base == "/" {
        resources
    } else {
        Router::new()
            .nest(&base, resources)
            .fallback(unknown_resource)
    };

    // A layer on the router itself runs after route matching, so the path
    // rewrite has to wrap the router as a whole.
    let normalized = middleware::map_request(normalize_path).layer(routes.with_state(state));

    Router::new()
        .fallback_service(normalized)
        .layer(middleware::from_fn(preflight))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization"),
        ))
        .layer(TraceLayer::new_for_http())
}

async fn unknown_resource() -> ApiError {
    ApiError::UnknownResource
}

async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    next.run(request).await
}

/// Join the non-empty segments of `path` back into an absolute path.
fn collapse_segments(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

async fn normalize_path(mut request: Request) -> Request {
    let uri = request.uri();
    let path = collapse_segments(uri.path());
    if path == uri.path() {
        return request;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };
    let mut parts = uri.clone().into_parts();
    let rewritten = PathAndQuery::try_from(path_and_query)
        .ok()
        .and_then(|pq| {
            parts.path_and_query = Some(pq);
            Uri::from_parts(parts).ok()
        });
    if let Some(uri) = rewritten {
        *request.uri_mut() = uri;
    }
    request
}
