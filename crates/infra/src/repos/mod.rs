mod company;
mod shared;

pub use company::{ICompanyRepo, InMemoryCompanyRepo, PostgresCompanyRepo};
pub use shared::repo::RepoError;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub companies: Arc<dyn ICompanyRepo>,
}

impl Repos {
    pub fn create_postgres(pool: PgPool) -> Self {
        Self {
            companies: Arc::new(PostgresCompanyRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            companies: Arc::new(InMemoryCompanyRepo::new()),
        }
    }
}
