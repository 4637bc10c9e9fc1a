use models::company::{self, Model, NewCompany};
use sea_orm::DatabaseConnection;

use crate::company::repository::CompanyRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository; owns a clone of the injected pool handle.
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn list_all(&self) -> Result<Vec<Model>, ServiceError> {
        Ok(company::list_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        Ok(company::find_by_id(&self.db, id).await?)
    }

    async fn insert(&self, input: NewCompany) -> Result<Model, ServiceError> {
        Ok(company::insert(&self.db, input).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn storage_round_trip() -> anyhow::Result<()> {
        let repo = SeaOrmCompanyRepository::new(get_db().await?);
        assert!(repo.list_all().await?.is_empty());

        let created = repo.insert(NewCompany::new(Some("Acme".into()), Some("Jane Doe".into()))).await?;
        let found = repo.find_by_id(created.id).await?.expect("inserted row");
        assert_eq!(found, created);
        assert_eq!(repo.list_all().await?, vec![created]);
        Ok(())
    }

    #[tokio::test]
    async fn unmigrated_store_maps_to_storage_error() -> anyhow::Result<()> {
        let db = models::db::connect_with_config(&models::db::DatabaseConfig::in_memory()).await?;
        let repo = SeaOrmCompanyRepository::new(db);
        let err = repo.insert(NewCompany::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
        Ok(())
    }
}
