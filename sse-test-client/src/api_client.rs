use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn health(&self) -> Result<Value> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to call health endpoint")?;

        Self::json_body(response, "health check").await
    }

    pub async fn ask(&self, question: &str, lang: &str, top_k: i64) -> Result<Value> {
        let url = format!("{}/ask", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "question": question,
                "lang": lang,
                "top_k": top_k,
            }))
            .send()
            .await
            .context("Failed to ask question")?;

        Self::json_body(response, "ask").await
    }

    async fn json_body(response: reqwest::Response, what: &str) -> Result<Value> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            anyhow::bail!("{} failed: {} - Response: {}", what, status, body);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} response", what))
    }
}
