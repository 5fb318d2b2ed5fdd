use crate::prompt::ChatMessage;
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for an OpenAI-compatible chat endpoint.
#[derive(Clone)]
pub struct ChatConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl ChatConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(mut config: ChatConfig) -> Result<Self> {
        while config.base_url.ends_with('/') {
            config.base_url.pop();
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str { &self.config.model }

    /// Send `messages` and return the text of the first choice. No retries.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = ChatRequest { model: &self.config.model, messages };
        tracing::debug!(%url, model = %self.config.model, messages = messages.len(), "chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("sending request to {url}"))?;

        let status = response.status();
        let text = response.text().await.context("reading chat completion response")?;
        if !status.is_success() {
            tracing::error!(%status, body = %text, "chat completion failed");
            return Err(anyhow!("chat completion request failed (status {status})"));
        }

        let parsed: ChatResponse = serde_json::from_str(&text).context("decoding chat completion response")?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| anyhow!("chat completion response had no choices"))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
