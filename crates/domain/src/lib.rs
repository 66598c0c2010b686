mod company;
mod shared;

pub use company::{Company, CompanyPatch, CompanyProfile, InvalidCompanyError};
pub use shared::entity::{Entity, InvalidIDError, ID};
