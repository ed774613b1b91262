use std::time::Duration;

use async_trait::async_trait;
use models::{ApiError, CreateEmployeeRequest, Credentials, Employee, LoginResponse};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{PortalApi, EMPLOYEES_PATH, LOGIN_PATH};
use crate::errors::ServiceError;

/// `reqwest`-backed client for the portal backend.
#[derive(Clone)]
pub struct HttpApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApiClient {
    /// `base_url` includes any path prefix (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Config(format!("http client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    pub fn from_config(cfg: &configs::ApiConfig) -> Result<Self, ServiceError> {
        Self::new(cfg.base_url.clone(), cfg.timeout())
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        match token {
            Some(t) if !t.is_empty() => builder.bearer_auth(t),
            _ => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = builder.send().await.map_err(|e| {
            warn!(error = %e, "request failed before a response arrived");
            ApiError::transport(e.to_string())
        })?;
        let status = resp.status();
        debug!(status = status.as_u16(), url = %resp.url(), "response received");
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::transport(format!("unexpected response body: {e}")))
    }
}

#[async_trait]
impl PortalApi for HttpApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let req = self.request(Method::POST, LOGIN_PATH, None).json(credentials);
        self.send(req).await
    }

    async fn list_employees(&self, token: Option<&str>) -> Result<Vec<Employee>, ApiError> {
        let req = self.request(Method::GET, EMPLOYEES_PATH, token);
        self.send(req).await
    }

    async fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
        token: Option<&str>,
    ) -> Result<Employee, ApiError> {
        let req = self.request(Method::POST, EMPLOYEES_PATH, token).json(request);
        self.send(req).await
    }
}
