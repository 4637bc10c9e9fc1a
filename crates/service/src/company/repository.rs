use async_trait::async_trait;
use models::company::{Model, NewCompany};

use crate::errors::ServiceError;

/// Repository abstraction for company persistence.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// All rows, ascending by id.
    async fn list_all(&self) -> Result<Vec<Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    /// Assigns `id` and fills a missing `founding_date` with the current time.
    async fn insert(&self, input: NewCompany) -> Result<Model, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCompanyRepository {
        rows: Mutex<Vec<Model>>,
        failing: AtomicBool,
    }

    impl MockCompanyRepository {
        /// A repository whose every call fails with `ServiceError::Storage`.
        pub fn failing() -> Self {
            let repo = Self::default();
            repo.set_failing(true);
            repo
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(ServiceError::Storage("simulated storage failure".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CompanyRepository for MockCompanyRepository {
        async fn list_all(&self) -> Result<Vec<Model>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|c| c.id == id).cloned())
        }

        async fn insert(&self, input: NewCompany) -> Result<Model, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let id = rows.last().map(|c| c.id + 1).unwrap_or(1);
            let created = Model {
                id,
                name: input.name,
                founder: input.founder,
                founding_date: input.founding_date.unwrap_or_else(models::company::now),
            };
            rows.push(created.clone());
            Ok(created)
        }
    }
}
