use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use models::company::CompanyRepresentation;
use tracing::warn;

use crate::errors::ApiError;
use crate::extract::CompanyId;
use crate::state::ServerState;

/// 列出所有公司，按 id 升序
#[utoipa::path(get, path = "/companies", tag = "companies", responses((status = 200, description = "All companies", body = [crate::openapi::CompanyDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CompanyRepresentation>>, ApiError> {
    let rows = state.companies.list().await?;
    Ok(Json(rows.into_iter().map(CompanyRepresentation::from).collect()))
}

/// 创建公司；任何失败统一返回 422
#[utoipa::path(
    post,
    path = "/companies",
    tag = "companies",
    request_body = crate::openapi::CreateCompanyRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CompanyDoc),
        (status = 422, description = "Unprocessable Entity", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<CompanyRepresentation>), ApiError> {
    let body = body.map_err(|e| {
        warn!(kind = "validation", error = %e, "create_company_rejected");
        ApiError::Unprocessable
    })?;
    let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
    match state.companies.create_from_body(content_type, &body).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(created.to_representation()))),
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "create_company_rejected");
            Err(ApiError::Unprocessable)
        }
    }
}

/// 获取指定公司
#[utoipa::path(
    get,
    path = "/companies/{id}",
    tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::CompanyDoc),
        (status = 404, description = "Company not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, CompanyId(id): CompanyId) -> Result<Json<CompanyRepresentation>, ApiError> {
    let found = state.companies.get(id).await?;
    Ok(Json(found.to_representation()))
}
