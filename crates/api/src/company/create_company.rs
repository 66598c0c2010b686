use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::create_company::*;
use company_registry_domain::{Company, CompanyProfile, InvalidCompanyError};
use company_registry_infra::{RegistryContext, RepoError};

pub async fn create_company_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = CreateCompanyUseCase { profile: body.0 };

    execute(usecase, &ctx)
        .await
        .map(|company| {
            HttpResponse::Ok().json(APIResponse::new(
                "Company information was registered.",
                company.id,
            ))
        })
        .map_err(RegistryError::from)
}

#[derive(Debug)]
struct CreateCompanyUseCase {
    pub profile: CompanyProfile,
}

#[derive(Debug)]
enum UseCaseError {
    InvalidCompany(InvalidCompanyError),
    Storage(RepoError),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCompany(e) => Self::BadClientData(e.to_string()),
            UseCaseError::Storage(e) => {
                Self::from_storage(e, "An error occurred during registration.")
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        self.profile
            .validate()
            .map_err(UseCaseError::InvalidCompany)?;

        ctx.repos
            .companies
            .insert(&self.profile)
            .await
            .map_err(UseCaseError::Storage)
    }
}
