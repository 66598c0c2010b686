use crate::dtos::CompanyDTO;
use company_registry_domain::{Company, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct CompaniesResponse {
    pub success: bool,
    pub companies: Vec<CompanyDTO>,
}

impl CompaniesResponse {
    pub fn new(companies: Vec<Company>) -> Self {
        Self {
            success: true,
            companies: companies.into_iter().map(CompanyDTO::new).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CompanyResponse {
    pub success: bool,
    pub company: CompanyDTO,
}

impl CompanyResponse {
    pub fn new(company: Company) -> Self {
        Self {
            success: true,
            company: CompanyDTO::new(company),
        }
    }
}

/// Acknowledgment of a write
#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Deserialize)]
pub struct CompanyPathParams {
    pub company_id: ID,
}

pub mod list_companies {
    use super::*;

    pub type APIResponse = CompaniesResponse;
}

pub mod create_company {
    use super::*;
    use company_registry_domain::CompanyProfile;

    pub type RequestBody = CompanyProfile;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub id: ID,
    }

    impl APIResponse {
        pub fn new<T: Into<String>>(message: T, id: ID) -> Self {
            Self {
                success: true,
                message: message.into(),
                id,
            }
        }
    }
}

pub mod get_company {
    use super::*;

    pub type PathParams = CompanyPathParams;

    pub type APIResponse = CompanyResponse;
}

pub mod update_company {
    use super::*;
    use company_registry_domain::CompanyPatch;

    pub type PathParams = CompanyPathParams;

    pub type RequestBody = CompanyPatch;

    pub type APIResponse = MessageResponse;
}

pub mod delete_company {
    use super::*;

    pub type PathParams = CompanyPathParams;

    pub type APIResponse = MessageResponse;
}

pub mod compare_companies {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub ids: Vec<ID>,
    }

    pub type APIResponse = CompaniesResponse;
}
