use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::AppError;

/// Numeric `:id` path segment.
///
/// A segment that is not an id cannot name any row, so it answers 404
/// through the usual error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(rejection.body_text()))?;

        raw.parse()
            .map(PathId)
            .map_err(|_| AppError::NotFound(format!("No resource matches id '{}'", raw)))
    }
}
