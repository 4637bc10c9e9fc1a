use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire representation of a company.
#[derive(ToSchema)]
pub struct CompanyDoc {
    pub id: i32,
    pub name: Option<String>,
    pub founder: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub founding_date: String,
}

#[derive(ToSchema)]
pub struct CreateCompanyRequest {
    pub name: Option<String>,
    pub founder: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::create,
        crate::routes::companies::get,
    ),
    components(
        schemas(
            HealthResponse,
            CompanyDoc,
            CreateCompanyRequest,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies")
    )
)]
pub struct ApiDoc;
