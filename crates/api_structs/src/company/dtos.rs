use company_registry_domain::{Company, CompanyProfile, ID};
use serde::{Deserialize, Serialize};

/// A company record as exposed over http: its `id` next to the
/// profile fields
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDTO {
    pub id: ID,
    #[serde(flatten)]
    pub profile: CompanyProfile,
}

impl CompanyDTO {
    pub fn new(company: Company) -> Self {
        Self {
            id: company.id,
            profile: company.profile,
        }
    }
}
