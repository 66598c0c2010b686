use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum APIErrorVariant {
    /// The server could not be reached
    Network,
    /// The body could not be decoded
    MalformedResponse,
    UnexpectedStatusCode,
    /// The server answered with `success: false`, e.g. for a company
    /// that does not exist
    Failure,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub status: Option<StatusCode>,
    pub message: String,
}

impl APIError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            variant: APIErrorVariant::Network,
            status: e.status(),
            message: e.to_string(),
        }
    }

    fn malformed(status: StatusCode, e: serde_json::Error) -> Self {
        Self {
            variant: APIErrorVariant::MalformedResponse,
            status: Some(status),
            message: e.to_string(),
        }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

fn failure_message(body: &Value) -> String {
    body.get("message")
        .and_then(|message| message.as_str())
        .unwrap_or_default()
        .to_string()
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.address, path)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        let res = req.send().await.map_err(APIError::network)?;
        let status = res.status();
        let body = res.bytes().await.map_err(APIError::network)?;

        if status != expected_status {
            let message = serde_json::from_slice::<Value>(&body)
                .map(|body| failure_message(&body))
                .unwrap_or_default();
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode,
                status: Some(status),
                message,
            });
        }

        let body: Value =
            serde_json::from_slice(&body).map_err(|e| APIError::malformed(status, e))?;
        if body.get("success") == Some(&Value::Bool(false)) {
            return Err(APIError {
                variant: APIErrorVariant::Failure,
                status: Some(status),
                message: failure_message(&body),
            });
        }

        serde_json::from_value(body).map_err(|e| APIError::malformed(status, e))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        let req = self.client.get(self.url(&path));
        self.handle_response(req, expected_status).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        let req = self.client.delete(self.url(&path));
        self.handle_response(req, expected_status).await
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        let req = self.client.put(self.url(&path)).json(&body);
        self.handle_response(req, expected_status).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        let req = self.client.post(self.url(&path)).json(&body);
        self.handle_response(req, expected_status).await
    }
}
