use super::ICompanyRepo;
use crate::repos::shared::{inmemory_repo::Collection, repo::RepoError};
use company_registry_domain::{Company, CompanyPatch, CompanyProfile, ID};

pub struct InMemoryCompanyRepo {
    companies: Collection<Company>,
}

impl InMemoryCompanyRepo {
    pub fn new() -> Self {
        Self {
            companies: Collection::new(),
        }
    }
}

impl Default for InMemoryCompanyRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Mirrors the `CHECK` on `companies.company_name`
fn check_name(name: &str) -> Result<(), RepoError> {
    if name.trim().is_empty() {
        return Err(RepoError::ConstraintViolation(
            "companies_company_name_check".into(),
        ));
    }
    Ok(())
}

/// Same order as `ORDER BY lower(company_name), company_name, id`
fn name_order(company: &Company) -> (String, String, ID) {
    (
        company.profile.company_name.to_lowercase(),
        company.profile.company_name.clone(),
        company.id,
    )
}

#[async_trait::async_trait]
impl ICompanyRepo for InMemoryCompanyRepo {
    async fn insert(&self, profile: &CompanyProfile) -> Result<Company, RepoError> {
        check_name(&profile.company_name)?;
        let company = Company {
            id: self.companies.next_id(),
            profile: profile.clone(),
        };
        self.companies.insert(&company);
        Ok(company)
    }

    async fn find_all(&self) -> Result<Vec<Company>, RepoError> {
        let mut companies = self.companies.filter(|_| true);
        companies.sort_by_cached_key(name_order);
        Ok(companies)
    }

    async fn find(&self, company_id: &ID) -> Result<Option<Company>, RepoError> {
        Ok(self.companies.find(company_id))
    }

    async fn find_many(&self, company_ids: &[ID]) -> Result<Vec<Company>, RepoError> {
        let mut companies = self
            .companies
            .filter(|company| company_ids.contains(&company.id));
        companies.sort_by_key(|company| company.id);
        Ok(companies)
    }

    async fn update(&self, company_id: &ID, patch: &CompanyPatch) -> Result<u64, RepoError> {
        if let Some(name) = &patch.company_name {
            check_name(name)?;
        }
        Ok(self.companies.update_where(
            |company| company.id == *company_id,
            |company| company.profile.apply(patch),
        ))
    }

    async fn delete(&self, company_id: &ID) -> Result<Option<Company>, RepoError> {
        Ok(self.companies.remove(company_id))
    }
}
