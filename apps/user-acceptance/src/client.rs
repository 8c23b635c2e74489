//! Thin JSON client the scenarios drive against the endpoint.

use serde_json::Value;

use crate::errors::HarnessError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Issues JSON requests against a base URL. The client keeps no
/// response state of its own; scenarios own what came back.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

/// Status and decoded body of one exchange. An empty response body
/// decodes to `None`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    /// String field of the JSON body, when both exist.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.body.as_ref()?.get(name)?.as_str()
    }

    pub fn field_i64(&self, name: &str) -> Option<i64> {
        self.body.as_ref()?.get(name)?.as_i64()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, HarnessError> {
        let response = self
            .http
            .get(self.url(path))
            .header("accept", JSON_CONTENT_TYPE)
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse, HarnessError> {
        let response = self
            .http
            .post(self.url(path))
            .header("accept", JSON_CONTENT_TYPE)
            .json(body)
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> Result<ApiResponse, HarnessError> {
        let response = self
            .http
            .put(self.url(path))
            .header("accept", JSON_CONTENT_TYPE)
            .json(body)
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, HarnessError> {
        let response = self
            .http
            .delete(self.url(path))
            .header("accept", JSON_CONTENT_TYPE)
            .send()
            .await?;
        Self::read(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(response: reqwest::Response) -> Result<ApiResponse, HarnessError> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = if text.is_empty() {
            None
        } else {
            Some(serde_json::from_str(&text)?)
        };
        tracing::debug!(status, has_body = body.is_some(), "response received");
        Ok(ApiResponse { status, body })
    }
}
