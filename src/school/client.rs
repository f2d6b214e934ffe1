use anyhow::{Error, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::Category;
use super::table::ProxyBody;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntentRequest {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IntentResponse {
    pub answer: Option<String>,
}

/// HTTP client for the school chat intent API and the notice/menu
/// feeds.
///
/// The same client is used against the upstream school API (intent
/// classification and `/api/{feed}/search`) and against a running
/// proxy (`/api/notice?category=`), depending on the base URL.
#[derive(Clone, Debug)]
pub struct SchoolClient {
    base_url: String,
    http: reqwest::Client,
}

impl SchoolClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a message to the intent endpoint and return the raw JSON
    /// response.
    pub async fn chat_intent_raw(&self, request: &IntentRequest) -> Result<Value, Error> {
        let url = format!("{}/api/chat/intent", self.base_url);
        let resp = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        let data: Value = resp.json().await?;
        tracing::debug!("Response from intent API: {}", data);
        Ok(data)
    }

    pub async fn chat_intent(&self, message: &str, user_id: &str) -> Result<IntentResponse, Error> {
        let request = IntentRequest {
            message: message.to_string(),
            user_id: user_id.to_string(),
        };
        let data = self.chat_intent_raw(&request).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Query the upstream search endpoint for a category. The
    /// response is returned as is so callers can pass the status on.
    pub async fn search(&self, category: Category) -> Result<reqwest::Response, Error> {
        let url = format!("{}/api/{}/search", self.base_url, category.endpoint());
        let resp = self.http.get(url).send().await?;
        Ok(resp)
    }

    /// Fetch a category feed through the proxy endpoint.
    pub async fn notice_feed(&self, category: Category) -> Result<ProxyBody, Error> {
        let mut url = Url::parse(&format!("{}/api/notice", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("category", category.name());

        let resp = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?;
        let text = resp.text().await?;
        Ok(ProxyBody::parse(&text))
    }
}
