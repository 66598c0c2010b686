use crate::{APIResponse, BaseClient, CompanyPatch, CompanyProfile, ID};
use company_registry_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CompanyClient {
    base: Arc<BaseClient>,
}

pub struct UpdateCompanyInput {
    pub company_id: ID,
    pub patch: CompanyPatch,
}

impl CompanyClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<list_companies::APIResponse> {
        self.base.get("companies".into(), StatusCode::OK).await
    }

    pub async fn create(
        &self,
        profile: CompanyProfile,
    ) -> APIResponse<create_company::APIResponse> {
        self.base
            .post(profile, "companies".into(), StatusCode::OK)
            .await
    }

    pub async fn get(&self, company_id: ID) -> APIResponse<get_company::APIResponse> {
        self.base
            .get(format!("companies/{}", company_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateCompanyInput,
    ) -> APIResponse<update_company::APIResponse> {
        self.base
            .put(
                input.patch,
                format!("companies/{}", input.company_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, company_id: ID) -> APIResponse<delete_company::APIResponse> {
        self.base
            .delete(format!("companies/{}", company_id), StatusCode::OK)
            .await
    }

    pub async fn compare(&self, ids: Vec<ID>) -> APIResponse<compare_companies::APIResponse> {
        let body = compare_companies::RequestBody { ids };
        self.base
            .post(body, "compare".into(), StatusCode::OK)
            .await
    }
}
