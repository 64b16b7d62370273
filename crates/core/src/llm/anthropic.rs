use crate::config::Settings;
use crate::llm::error::TransportError;
use crate::llm::{Producer, Provider};
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-latest";
const DEFAULT_MAX_TOKENS: u32 = 4096;
const DEFAULT_TIMEOUT_SECS: u64 = 90;

#[derive(Debug, Clone)]
pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_anthropic_api_key()?.to_string();
        let base_url = settings
            .anthropic_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = settings
            .anthropic_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let max_tokens = std::env::var("ANTHROPIC_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let timeout_secs = std::env::var("ANTHROPIC_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            http,
            api_key,
            base_url,
            model,
            max_tokens,
        })
    }

    async fn create_message(&self, req: CreateMessageRequest) -> anyhow::Result<CreateMessageResponse> {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_str(&self.api_key)?);
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));
        let res = self
            .http
            .post(url)
            .headers(headers)
            .json(&req)
            .send()
            .await
            .map_err(|err| transport_error("request", err.to_string(), None))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|err| transport_error("read_body", err.to_string(), None))?;
        if !status.is_success() {
            return Err(transport_error("http", format!("status={status}"), Some(text)).into());
        }

        let raw_json = serde_json::from_str::<serde_json::Value>(&text).map_err(|err| {
            transport_error("decode", format!("response is not JSON: {err}"), Some(text.clone()))
        })?;
        let parsed = serde_json::from_value::<CreateMessageResponse>(raw_json).map_err(|err| {
            transport_error(
                "decode",
                format!("unexpected message envelope: {err}"),
                Some(text.clone()),
            )
        })?;
        Ok(parsed)
    }

    fn system_prompt() -> String {
        [
            "You are a Diablo III build advisor.",
            "Return ONLY valid JSON matching the schema in the user message.",
            "No markdown, no prose before or after the JSON, no comments, no trailing commas.",
            "Use double quotes for all JSON strings.",
        ]
        .join("\n")
    }

    fn response_text(res: &CreateMessageResponse) -> String {
        let mut out = String::new();
        for block in &res.content {
            if let ContentBlock::Text { text } = block {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(text);
            }
        }
        out
    }
}

fn transport_error(stage: &'static str, detail: String, raw_output: Option<String>) -> TransportError {
    let raw_response_json = raw_output
        .as_deref()
        .and_then(|s| serde_json::from_str::<serde_json::Value>(s).ok());
    TransportError {
        provider: Provider::Anthropic,
        stage,
        detail,
        raw_output,
        raw_response_json,
    }
}

#[async_trait::async_trait]
impl Producer for AnthropicClient {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let make_req = |max_tokens: u32| CreateMessageRequest {
            model: self.model.clone(),
            max_tokens,
            system: Some(Self::system_prompt()),
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let mut res = self.create_message(make_req(self.max_tokens)).await?;

        // A truncated reply can never parse; ask once more with a higher ceiling.
        if matches!(res.stop_reason.as_deref(), Some("max_tokens")) {
            let bumped = self.max_tokens.saturating_mul(2).max(8192);
            tracing::warn!(
                from = self.max_tokens,
                to = bumped,
                "Anthropic stop_reason=max_tokens; retrying once with higher max_tokens"
            );
            res = self.create_message(make_req(bumped)).await?;
        }

        let text = Self::response_text(&res);
        if text.trim().is_empty() {
            return Err(transport_error("empty_reply", "reply contained no text blocks".to_string(), None).into());
        }
        Ok(text)
    }
}

#[derive(Debug, Clone, Serialize)]
struct CreateMessageRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CreateMessageResponse {
    content: Vec<ContentBlock>,

    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },

    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_text_blocks_and_skips_others() {
        let res: CreateMessageResponse = serde_json::from_value(json!({
            "content": [
                {"type": "thinking", "thinking": "hmm"},
                {"type": "text", "text": "{\"summary\":"},
                {"type": "tool_use", "id": "t", "name": "x", "input": {}},
                {"type": "text", "text": "\"ok\"}"}
            ],
            "stop_reason": "end_turn"
        }))
        .unwrap();

        assert_eq!(AnthropicClient::response_text(&res), "{\"summary\":\n\"ok\"}");
        assert_eq!(res.stop_reason.as_deref(), Some("end_turn"));
    }

    #[test]
    fn transport_error_keeps_json_body() {
        let err = transport_error(
            "http",
            "status=401".to_string(),
            Some("{\"type\":\"error\"}".to_string()),
        );
        assert_eq!(err.raw_response_json, Some(json!({"type": "error"})));
        assert!(err.to_string().contains("stage=http"));
    }

    #[test]
    fn from_settings_requires_api_key() {
        let settings = Settings {
            anthropic_api_key: None,
            anthropic_base_url: None,
            anthropic_model: None,
            sentry_dsn: None,
            port: None,
        };
        assert!(AnthropicClient::from_settings(&settings).is_err());
    }
}
