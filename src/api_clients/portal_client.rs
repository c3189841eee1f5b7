use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::api_clients::client_factory::create_http_client;
use crate::api_clients::error_handling::map_api_error;
use crate::api_clients::request::{RequestBody, RequestDescriptor};
use crate::api_clients::response::ApiSuccess;
use crate::auth::SessionManager;
use crate::config::RuntimeConfig;
use crate::error::{AppError, AppResult};

/// The single authenticated entry point for every backend call: base-URL
/// resolution, bearer attachment, body encoding, and error normalization
/// happen here and nowhere else.
#[derive(Debug)]
pub struct PortalClient {
    http: Client,
    base_url: Url,
    sessions: Arc<SessionManager>,
}

impl PortalClient {
    pub fn new(config: &RuntimeConfig, sessions: Arc<SessionManager>) -> AppResult<Self> {
        let base_url = Url::parse(&config.server_url).map_err(|e| {
            AppError::ConfigError(format!("invalid server URL `{}`: {}", config.server_url, e))
        })?;
        Ok(Self {
            http: create_http_client(),
            base_url,
            sessions,
        })
    }

    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    fn build_url(&self, descriptor: &RequestDescriptor) -> AppResult<Url> {
        if descriptor.path.is_empty() {
            return Err(AppError::InvalidArgument("request path is empty".to_string()));
        }

        // Url::join would drop the base path segment for absolute inputs, so
        // splice the paths together by hand.
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        let path = if descriptor.path.starts_with('/') {
            descriptor.path.clone()
        } else {
            format!("/{}", descriptor.path)
        };
        url.set_path(&format!("{}{}", base_path, path));

        if !descriptor.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &descriptor.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Execute one descriptor against the backend.
    ///
    /// Calls that require authentication fail with `Unauthenticated` before
    /// any network traffic when no session exists. A 401/403 response clears
    /// the stored session before the error is surfaced, so callers can send
    /// the user back to the login view without their own cleanup.
    pub async fn request(&self, descriptor: RequestDescriptor) -> AppResult<ApiSuccess> {
        let url = self.build_url(&descriptor)?;
        let mut builder = self.http.request(descriptor.method.clone(), url.clone());

        if descriptor.requires_auth {
            let token = self.sessions.token().await.ok_or(AppError::Unauthenticated)?;
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        builder = match descriptor.body {
            None => builder,
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Multipart(form)) => builder.multipart(form),
        };

        debug!("{} {}", descriptor.method, url);
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("request failed: {}", e)))?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("Backend rejected credentials ({}), clearing local session", status);
            self.sessions.clear().await;
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_api_error(status.as_u16(), &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("failed to read response body: {}", e)))?;
        ApiSuccess::from_body(status.as_u16(), &body)
    }

    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> AppResult<ApiSuccess> {
        let mut descriptor = RequestDescriptor::get(path);
        for (key, value) in query {
            descriptor = descriptor.query(*key, *value);
        }
        self.request(descriptor).await
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> AppResult<ApiSuccess> {
        let mut descriptor = RequestDescriptor::post(path);
        if let Some(body) = body {
            descriptor = descriptor.json(body);
        }
        self.request(descriptor).await
    }

    pub async fn put(&self, path: &str, body: Option<Value>) -> AppResult<ApiSuccess> {
        let mut descriptor = RequestDescriptor::put(path);
        if let Some(body) = body {
            descriptor = descriptor.json(body);
        }
        self.request(descriptor).await
    }

    pub async fn delete(&self, path: &str) -> AppResult<ApiSuccess> {
        self.request(RequestDescriptor::delete(path)).await
    }
}
