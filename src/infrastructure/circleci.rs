//! # CircleCI Client
//!
//! Thin wrapper over the CircleCI v1 REST API.
//! Builds endpoint URLs, attaches the `circle-token` credential and maps HTTP
//! status codes onto `CiError`. Each call is a single request; nothing is retried.

use reqwest::Method;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::config::CircleCiConfig;
use crate::domain::error::CiError;
use crate::domain::project::ProjectRef;
use crate::domain::types::{Build, ProjectSummary, ProviderMessage};

#[derive(Clone)]
pub struct CircleCiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl CircleCiClient {
    pub fn new(config: &CircleCiConfig) -> Result<Self, CiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base(),
            token: config.token.clone(),
        })
    }

    /// Builds on `branch`, most recent first.
    pub async fn latest_builds(
        &self,
        project: &ProjectRef,
        branch: &str,
    ) -> Result<Vec<Build>, CiError> {
        let path = format!(
            "/project/{}/tree/{}",
            project.url_path(),
            urlencoding::encode(branch)
        );
        self.send(Method::GET, &path).await
    }

    /// Returns the newly queued build.
    pub async fn retry_build(&self, project: &ProjectRef, build_num: u64) -> Result<Build, CiError> {
        let path = format!("/project/{}/{}/retry", project.url_path(), build_num);
        self.send(Method::POST, &path).await
    }

    pub async fn cancel_build(&self, project: &ProjectRef, build_num: u64) -> Result<Build, CiError> {
        let path = format!("/project/{}/{}/cancel", project.url_path(), build_num);
        self.send(Method::POST, &path).await
    }

    pub async fn clear_cache(&self, project: &ProjectRef) -> Result<(), CiError> {
        let path = format!("/project/{}/build-cache", project.url_path());
        self.send::<serde_json::Value>(Method::DELETE, &path)
            .await
            .map(|_| ())
    }

    /// Every project the token can see.
    pub async fn projects(&self) -> Result<Vec<ProjectSummary>, CiError> {
        self.send(Method::GET, "/projects").await
    }

    async fn send<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T, CiError> {
        let url = format!("{}{}", self.base_url, path);
        // Logged before the token is attached.
        tracing::info!("CircleCI request: {} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.query(&[("circle-token", token.as_str())]);
        }
        if method != Method::GET {
            request = request.json(&serde_json::json!({}));
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if status != 200 {
            tracing::warn!("CircleCI {} {} answered {}", method, path, status);
        }
        interpret(status, &body)
    }
}

/// Map a raw status code and body onto a decoded payload or a `CiError`.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, CiError> {
    match status {
        200 => serde_json::from_str(body).map_err(|e| CiError::Decode(e.to_string())),
        401 => Err(CiError::Unauthorized),
        404 => {
            let message = serde_json::from_str::<ProviderMessage>(body)
                .map(|m| m.message)
                .unwrap_or_else(|_| body.trim().to_string());
            Err(CiError::NotFound(message))
        }
        500 => Err(CiError::Server),
        _ => Err(CiError::UnexpectedStatus {
            status,
            body: body.to_string(),
        }),
    }
}
