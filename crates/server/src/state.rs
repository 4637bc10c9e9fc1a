use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::company::{repo::seaorm::SeaOrmCompanyRepository, repository::CompanyRepository, CompanyService};

/// Shared handler state. Cloned per request; holds only the injected service.
#[derive(Clone)]
pub struct ServerState {
    pub companies: CompanyService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self {
        Self { companies: CompanyService::new(repo) }
    }

    /// State backed by the SeaORM repository over `db`.
    pub fn with_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmCompanyRepository::new(db)))
    }
}
