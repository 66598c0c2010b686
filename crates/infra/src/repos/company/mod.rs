mod inmemory;
mod postgres;

use crate::repos::shared::repo::RepoError;
use company_registry_domain::{Company, CompanyPatch, CompanyProfile, ID};
pub use inmemory::InMemoryCompanyRepo;
pub use postgres::PostgresCompanyRepo;

#[async_trait::async_trait]
pub trait ICompanyRepo: Send + Sync {
    /// Stores a new company, the storage assigns its `id`
    async fn insert(&self, profile: &CompanyProfile) -> Result<Company, RepoError>;
    /// All companies ordered by name
    async fn find_all(&self) -> Result<Vec<Company>, RepoError>;
    async fn find(&self, company_id: &ID) -> Result<Option<Company>, RepoError>;
    /// Companies matching any of the given ids ordered by id. Unknown ids
    /// are skipped.
    async fn find_many(&self, company_ids: &[ID]) -> Result<Vec<Company>, RepoError>;
    /// Returns the number of updated rows
    async fn update(&self, company_id: &ID, patch: &CompanyPatch) -> Result<u64, RepoError>;
    async fn delete(&self, company_id: &ID) -> Result<Option<Company>, RepoError>;
}
