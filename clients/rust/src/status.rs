use crate::{APIResponse, BaseClient};
use company_registry_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check_health(&self) -> APIResponse<get_registry_status::APIResponse> {
        self.base.get("status".into(), StatusCode::OK).await
    }
}
