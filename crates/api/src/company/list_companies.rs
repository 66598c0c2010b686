use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::list_companies::*;
use company_registry_domain::Company;
use company_registry_infra::{RegistryContext, RepoError};

pub async fn list_companies_controller(
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = ListCompaniesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|companies| HttpResponse::Ok().json(APIResponse::new(companies)))
        .map_err(RegistryError::from)
}

#[derive(Debug)]
struct ListCompaniesUseCase {}

#[derive(Debug)]
enum UseCaseError {
    Storage(RepoError),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage(e) => Self::from_storage(
                e,
                "An error occurred while fetching company information.",
            ),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListCompaniesUseCase {
    type Response = Vec<Company>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListCompanies";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .companies
            .find_all()
            .await
            .map_err(UseCaseError::Storage)
    }
}
