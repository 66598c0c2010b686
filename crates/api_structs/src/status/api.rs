use serde::{Deserialize, Serialize};

pub mod get_registry_status {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        pub service: String,
        pub version: String,
    }

    impl APIResponse {
        pub fn new<S: Into<String>, V: Into<String>>(service: S, version: V) -> Self {
            Self {
                success: true,
                service: service.into(),
                version: version.into(),
            }
        }
    }
}
