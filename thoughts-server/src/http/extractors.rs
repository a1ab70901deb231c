//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use super::error::ApiError;

/// Extract the `{id}` path segment as a UUID.
///
/// A segment that does not parse rejects with the malformed-id error,
/// before any storage call is made. This keeps 400 (bad id) distinct
/// from 404 (well-formed id with no record).
pub struct ThoughtId(pub Uuid);

impl<S> FromRequestParts<S> for ThoughtId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MalformedId { id: String::new() })?;

        let uuid = Uuid::parse_str(&id).map_err(|_| ApiError::MalformedId { id })?;

        Ok(Self(uuid))
    }
}
