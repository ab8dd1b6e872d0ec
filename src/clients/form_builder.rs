//! Form builder (Google Apps Script web app) client module
//!
//! One endpoint creates a form from an [`EventDefinition`]; a second one
//! lists the participants who already signed up for an event.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::core::models::EventDefinition;
use crate::errors::{BotError, describe_http_error};

/// Links returned after a form was created. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormLinks {
    #[serde(default)]
    pub form_url: Option<String>,
    #[serde(default, alias = "sheetUrl")]
    pub summary_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ParticipantList {
    #[serde(default)]
    names: Vec<String>,
}

#[async_trait]
pub trait FormService: Send + Sync {
    async fn create_form(&self, definition: &EventDefinition) -> Result<FormLinks, BotError>;

    async fn list_participants(&self, title: &str) -> Result<Vec<String>, BotError>;
}

pub struct AppsScriptClient {
    http: Client,
    form_builder_url: String,
    query_url: String,
}

impl AppsScriptClient {
    #[must_use]
    pub fn new(http: Client, form_builder_url: String, query_url: String) -> Self {
        Self {
            http,
            form_builder_url,
            query_url,
        }
    }
}

#[async_trait]
impl FormService for AppsScriptClient {
    async fn create_form(&self, definition: &EventDefinition) -> Result<FormLinks, BotError> {
        let resp = self
            .http
            .post(&self.form_builder_url)
            .json(definition)
            .send()
            .await
            .map_err(|e| BotError::FormBuildFailed(describe_http_error(&e)))?;

        let resp = resp
            .error_for_status()
            .map_err(|e| BotError::FormBuildFailed(describe_http_error(&e)))?;

        let links: FormLinks = resp
            .json()
            .await
            .map_err(|e| BotError::FormBuildFailed(format!("invalid response: {e}")))?;

        info!(
            title = %definition.title,
            has_form_url = links.form_url.is_some(),
            has_summary_url = links.summary_url.is_some(),
            "Form created"
        );
        Ok(links)
    }

    async fn list_participants(&self, title: &str) -> Result<Vec<String>, BotError> {
        let resp = self
            .http
            .get(&self.query_url)
            .query(&[("title", title)])
            .send()
            .await
            .map_err(|e| BotError::QueryFailed(describe_http_error(&e)))?
            .error_for_status()
            .map_err(|e| BotError::QueryFailed(describe_http_error(&e)))?;

        let list: ParticipantList = resp
            .json()
            .await
            .map_err(|e| BotError::QueryFailed(format!("invalid response: {e}")))?;

        info!(title, count = list.names.len(), "Fetched participants");
        Ok(list.names)
    }
}
