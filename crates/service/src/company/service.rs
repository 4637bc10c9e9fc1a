use std::sync::Arc;

use models::company::Model;
use tracing::{debug, info, instrument};

use super::domain::{parse_create_body, CreateCompanyInput};
use super::repository::CompanyRepository;
use crate::errors::ServiceError;

/// Company business service independent of web framework.
/// Holds no state besides the injected repository.
#[derive(Clone)]
pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        let rows = self.repo.list_all().await?;
        debug!(count = rows.len(), "companies_listed");
        Ok(rows)
    }

    /// Fetch one company; an unknown id is `ServiceError::NotFound`.
    ///
    /// # Examples
    /// ```
    /// use service::company::{CompanyService, repository::mock::MockCompanyRepository};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = CompanyService::new(Arc::new(MockCompanyRepository::default()));
    /// let err = tokio_test::block_on(svc.get(999)).unwrap_err();
    /// assert!(matches!(err, ServiceError::NotFound(_)));
    /// ```
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Model, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("company"))
    }

    /// Create a company from already-parsed input.
    ///
    /// # Examples
    /// ```
    /// use service::company::{CompanyService, domain::CreateCompanyInput, repository::mock::MockCompanyRepository};
    /// use std::sync::Arc;
    /// let svc = CompanyService::new(Arc::new(MockCompanyRepository::default()));
    /// let input = CreateCompanyInput { name: Some("Acme".into()), founder: Some("Jane Doe".into()) };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(created.name.as_deref(), Some("Acme"));
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateCompanyInput) -> Result<Model, ServiceError> {
        let created = self.repo.insert(input.into()).await?;
        info!(company_id = created.id, "company_created");
        Ok(created)
    }

    /// Parse a raw request body and create the company it describes.
    pub async fn create_from_body(&self, content_type: Option<&str>, body: &[u8]) -> Result<Model, ServiceError> {
        let input = parse_create_body(content_type, body)?;
        self.create(input).await
    }
}
