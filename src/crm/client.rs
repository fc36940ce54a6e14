// file: src/crm/client.rs
// description: authenticated HTTP client for the CRM company search endpoint
// reference: https://developers.hubspot.com/docs/api/crm/search

use crate::config::ApiConfig;
use crate::crm::request::SearchPayload;
use crate::crm::response::SearchResponse;
use crate::error::{Result, SearchError};
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Outcome of a credential probe, for the `verify` command.
#[derive(Debug, PartialEq, Eq)]
pub enum CredentialStatus {
    Accepted,
    Rejected(u16),
}

pub struct CompanySearchClient {
    client: Client,
    search_url: String,
    token: String,
}

impl CompanySearchClient {
    /// No request timeout is configured; a hung endpoint hangs the run.
    pub fn new(api: &ApiConfig, token: String) -> Self {
        Self {
            client: Client::new(),
            search_url: api.search_url(),
            token,
        }
    }

    /// One round trip for one name. Exactly three outcomes:
    /// 200 yields the parsed body, any other status yields `Rejected`
    /// (recoverable), and a network-level failure yields `Transport`
    /// (fatal for the whole run).
    pub async fn search_company(&self, name: &str) -> Result<SearchResponse> {
        let payload = SearchPayload::exact_name_match(name);

        debug!("Searching for company: {}", name);

        let response = self
            .client
            .post(&self.search_url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(SearchError::Rejected {
                name: name.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body: SearchResponse = response.json().await?;

        debug!("Received {} match(es) for {}", body.match_count(), name);

        Ok(body)
    }

    /// Issues one probe search to classify the configured credential.
    pub async fn verify_credentials(&self) -> Result<CredentialStatus> {
        match self.search_company("__credential_probe__").await {
            Ok(_) => Ok(CredentialStatus::Accepted),
            Err(SearchError::Rejected { status, .. }) => Ok(CredentialStatus::Rejected(status)),
            Err(other) => Err(other),
        }
    }
}
