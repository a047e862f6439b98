//! Members feed loader.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{parse_members, ParsedMembers};
use tracing::{debug, info};
use url::Url;

use crate::{config::Settings, error::LoadError};

#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Reads the complete member list in one request.
    async fn fetch_members(&self) -> Result<ParsedMembers, LoadError>;
}

/// Fetches the members feed with a single unauthenticated `GET`.
pub struct HttpMemberSource {
    http: Client,
    url: Url,
}

impl HttpMemberSource {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(http: Client, url: Url) -> Self {
        Self { http, url }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let url = settings.members_url()?;
        let http = Client::builder()
            .timeout(settings.request_timeout()?)
            .build()
            .context("failed to build HTTP client for members feed")?;
        Ok(Self::with_client(http, url))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl MemberSource for HttpMemberSource {
    async fn fetch_members(&self) -> Result<ParsedMembers, LoadError> {
        debug!(url = %self.url, "requesting members feed");
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| LoadError::Transport {
                url: self.url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(LoadError::Body)?;
        let parsed = parse_members(&body)?;
        info!(
            url = %self.url,
            accepted = parsed.members.len(),
            rejected = parsed.rejected.len(),
            "loaded members feed"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
