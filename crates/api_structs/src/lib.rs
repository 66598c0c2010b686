mod company;
mod shared;
mod status;

pub mod dtos {
    pub use crate::company::dtos::*;
}

pub use crate::company::api::*;
pub use crate::shared::FailureResponse;
pub use crate::status::api::*;
