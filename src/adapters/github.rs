use crate::config::GatewayConfig;
use crate::domain::model::TrackerIssue;
use crate::domain::ports::IssueTracker;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

const USER_AGENT: &str = concat!("site-relay/", env!("CARGO_PKG_VERSION"));

/// Issue-listing client for a GitHub-shaped tracker API.
pub struct GithubTracker {
    base: String,
    repo: String,
    token: Option<String>,
    client: Client,
}

impl GithubTracker {
    pub fn new(config: &GatewayConfig, client: Client) -> Self {
        Self {
            base: config.tracker_api_base.trim_end_matches('/').to_string(),
            repo: config.tracker_repo.clone(),
            token: config.tracker_token.clone(),
            client,
        }
    }
}

#[async_trait]
impl IssueTracker for GithubTracker {
    async fn list_bug_reports(&self) -> Result<Option<Vec<TrackerIssue>>> {
        let url = format!("{}/repos/{}/issues", self.base, self.repo);
        let mut request = self
            .client
            .get(&url)
            .query(&[("state", "all"), ("labels", "bug"), ("per_page", "100")])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");

        // Anonymous requests work too, at the tracker's anonymous rate limit.
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(repo = %self.repo, "listing bug reports");
        let response = request.send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => {
                tracing::warn!(status = %status, "tracker listing failed");
                Err(RelayError::UpstreamError {
                    status: status.as_u16(),
                })
            }
        }
    }
}
