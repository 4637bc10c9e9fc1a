use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::ApiError;

/// `{id}` path segment written as unsigned decimal digits.
///
/// Non-digit segments are an unmatched route. Digit strings beyond `i32`
/// cannot name a stored row, so they are reported as a missing company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyId(pub i32);

impl CompanyId {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::RouteNotFound);
        }
        raw.parse::<i32>().map(CompanyId).map_err(|_| ApiError::CompanyNotFound)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CompanyId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::RouteNotFound)?;
        CompanyId::parse(&raw)
    }
}
