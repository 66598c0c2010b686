use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::get_company::*;
use company_registry_domain::{Company, ID};
use company_registry_infra::{RegistryContext, RepoError};

pub async fn get_company_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = GetCompanyUseCase {
        company_id: path.company_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|company| HttpResponse::Ok().json(APIResponse::new(company)))
        .map_err(RegistryError::from)
}

#[derive(Debug)]
struct GetCompanyUseCase {
    pub company_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    Storage(RepoError),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(_) => {
                Self::NotFound("Company information was not found.".into())
            }
            UseCaseError::Storage(e) => Self::from_storage(
                e,
                "An error occurred while fetching company information.",
            ),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        let company = ctx
            .repos
            .companies
            .find(&self.company_id)
            .await
            .map_err(UseCaseError::Storage)?;
        match company {
            Some(company) => Ok(company),
            None => Err(UseCaseError::NotFound(self.company_id)),
        }
    }
}
