use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::update_company::*;
use company_registry_domain::{CompanyPatch, InvalidCompanyError, ID};
use company_registry_infra::{RegistryContext, RepoError};
use tracing::info;

pub async fn update_company_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = UpdateCompanyUseCase {
        company_id: path.company_id,
        patch: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("Company information was updated.")))
        .map_err(RegistryError::from)
}

#[derive(Debug)]
struct UpdateCompanyUseCase {
    pub company_id: ID,
    pub patch: CompanyPatch,
}

#[derive(Debug)]
enum UseCaseError {
    InvalidPatch(InvalidCompanyError),
    Storage(RepoError),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidPatch(e) => Self::BadClientData(e.to_string()),
            UseCaseError::Storage(e) => {
                Self::from_storage(e, "An error occurred during update.")
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateCompanyUseCase {
    /// Number of updated companies
    type Response = u64;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        self.patch.validate().map_err(UseCaseError::InvalidPatch)?;

        let updated = ctx
            .repos
            .companies
            .update(&self.company_id, &self.patch)
            .await
            .map_err(UseCaseError::Storage)?;
        // An unknown id is still acknowledged as a successful update
        if updated == 0 {
            info!("Update matched no company with id: {}", self.company_id);
        }
        Ok(updated)
    }
}
