use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::compare_companies::*;
use company_registry_domain::{Company, ID};
use company_registry_infra::{RegistryContext, RepoError};

pub async fn compare_companies_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = CompareCompaniesUseCase { ids: body.0.ids };

    execute(usecase, &ctx)
        .await
        .map(|companies| HttpResponse::Ok().json(APIResponse::new(companies)))
        .map_err(RegistryError::from)
}

/// Fetches the companies selected for a side by side comparison
#[derive(Debug)]
struct CompareCompaniesUseCase {
    pub ids: Vec<ID>,
}

#[derive(Debug)]
enum UseCaseError {
    NoCompaniesSelected,
    Storage(RepoError),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoCompaniesSelected => {
                Self::BadClientData("No companies were selected for comparison.".into())
            }
            UseCaseError::Storage(e) => Self::from_storage(
                e,
                "An error occurred while fetching comparison information.",
            ),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CompareCompaniesUseCase {
    type Response = Vec<Company>;

    type Error = UseCaseError;

    const NAME: &'static str = "CompareCompanies";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        if self.ids.is_empty() {
            return Err(UseCaseError::NoCompaniesSelected);
        }

        ctx.repos
            .companies
            .find_many(&self.ids)
            .await
            .map_err(UseCaseError::Storage)
    }
}
