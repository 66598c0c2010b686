use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::delete_company::*;
use company_registry_domain::{Company, ID};
use company_registry_infra::{RegistryContext, RepoError};

pub async fn delete_company_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = DeleteCompanyUseCase {
        company_id: path.company_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("Company information was deleted.")))
        .map_err(RegistryError::from)
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
                Self::NotFound("The specified company was not found.".into())
            }
            UseCaseError::Storage(e) => {
                Self::from_storage(e, "An error occurred during deletion.")
            }
        }
    }
}

#[derive(Debug)]
struct DeleteCompanyUseCase {
    company_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        let deleted = ctx
            .repos
            .companies
            .delete(&self.company_id)
            .await
            .map_err(UseCaseError::Storage)?;
        deleted.ok_or(UseCaseError::NotFound(self.company_id))
    }
}
