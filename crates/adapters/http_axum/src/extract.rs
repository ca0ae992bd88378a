//! Request extractors shared by the resource handlers.

use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use assetdesk_domain::account::AccountKind;
use assetdesk_domain::error::ValidationError;

use crate::error::ApiError;

/// The `{id}` path segment parsed into a typed identifier.
///
/// A segment that does not parse is rejected with 400 `invalid id`.
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: FromStr + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        match raw.parse() {
            Ok(id) => Ok(Self(id)),
            Err(_) => Err(ValidationError::InvalidId(raw).into()),
        }
    }
}

/// A JSON request body, read whatever the content type.
///
/// A body that is not the expected JSON is read as an empty one, so every
/// field binds as absent and the store decides what to make of it.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(err) => {
                tracing::debug!(error = %err, "unreadable body, treating it as empty");
                Ok(Self(T::default()))
            }
        }
    }
}

#[derive(Deserialize)]
struct SubQuery {
    sub: Option<String>,
}

/// The account table selected by the `sub` query parameter.
///
/// Handlers list it before any other extractor so a missing or unknown
/// selector wins over every other failure.
pub struct AccountSelector(pub AccountKind);

impl<S> FromRequestParts<S> for AccountSelector
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<SubQuery>::try_from_uri(&parts.uri)?;
        let kind = AccountKind::from_selector(query.sub.as_deref())?;
        Ok(Self(kind))
    }
}
