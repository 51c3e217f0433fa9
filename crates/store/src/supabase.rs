//! Supabase (PostgREST) implementation of [`EntryStore`].
//!
//! Single choke point for store traffic: attaches the service
//! credential, expresses domain filters as query parameters, and never
//! retries or caches.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Method, RequestBuilder};
use serde_json::json;
use thanks_core::entry::SupportEntry;
use thanks_core::survey::SurveyAnswers;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::{EntryStore, MAX_LIST_LIMIT};

/// Name of the hosted table holding one row per issued token.
const TABLE: &str = "support_entries";

/// REST client for the hosted entry table.
pub struct SupabaseStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a store reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    /// Build a request against the entry table with credentials attached.
    ///
    /// Fails with [`StoreError::Configuration`] when the base URL or the
    /// service key is absent.
    fn request(&self, method: Method) -> Result<RequestBuilder, StoreError> {
        let (Some(base_url), Some(service_key)) = (
            self.config.base_url.as_deref(),
            self.config.service_key.as_deref(),
        ) else {
            return Err(StoreError::Configuration(
                "SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY must both be set".into(),
            ));
        };

        let url = format!("{base_url}/rest/v1/{TABLE}");
        Ok(self
            .client
            .request(method, url)
            .header("apikey", service_key)
            .bearer_auth(service_key))
    }

    /// Read a PostgREST row-set response, surfacing non-2xx as
    /// [`StoreError::Api`].
    async fn parse_rows(response: reqwest::Response) -> Result<Vec<SupportEntry>, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl EntryStore for SupabaseStore {
    async fn insert(&self, token: &str) -> Result<SupportEntry, StoreError> {
        let response = self
            .request(Method::POST)?
            .header("Prefer", "return=representation")
            .json(&json!({ "token": token }))
            .send()
            .await?;

        let rows = Self::parse_rows(response).await?;
        rows.into_iter().next().ok_or(StoreError::MissingRow)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<SupportEntry>, StoreError> {
        let token_filter = format!("eq.{token}");
        let response = self
            .request(Method::GET)?
            .query(&[
                ("select", "*"),
                ("token", token_filter.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await?;

        let rows = Self::parse_rows(response).await?;
        Ok(rows.into_iter().next())
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<SupportEntry>, StoreError> {
        let limit = limit.min(MAX_LIST_LIMIT).to_string();
        let response = self
            .request(Method::GET)?
            .query(&[
                ("select", "*"),
                ("order", "created_at.desc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        Self::parse_rows(response).await
    }

    async fn answer_if_open(
        &self,
        token: &str,
        answers: &SurveyAnswers,
    ) -> Result<Option<SupportEntry>, StoreError> {
        // The unanswered predicate rides in the PATCH filter, so the
        // store applies check-and-write atomically. An empty row set is
        // the already-answered (or unknown token) outcome.
        let token_filter = format!("eq.{token}");
        let body = json!({
            "answered_at": Utc::now(),
            "email": answers.email,
            "pen_name": answers.pen_name,
            "pen_name_public": answers.pen_name_public,
            "discovery": answers.discovery,
            "motive": answers.motive,
            "impression": answers.impression,
            "note": answers.note,
        });

        let response = self
            .request(Method::PATCH)?
            .query(&[
                ("token", token_filter.as_str()),
                ("answered_at", "is.null"),
            ])
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;

        let rows = Self::parse_rows(response).await?;
        Ok(rows.into_iter().next())
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }
}
