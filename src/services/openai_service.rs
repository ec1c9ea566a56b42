use super::{CompletionService, UpstreamError};
use crate::models::prompt::Message;
use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

pub struct OpenAIService {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAIService {
    pub fn new(url: String, api_key: String, model: String) -> Result<Self, UpstreamError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl CompletionService for OpenAIService {
    async fn complete(&self, messages: &[Message]) -> Result<String, UpstreamError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .client
            .post(&self.url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        debug!("completion received ({} bytes)", body.len());
        first_choice(&body)
    }
}

/// Prefers the provider's `error.message` over the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

fn first_choice(body: &str) -> Result<String, UpstreamError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(UpstreamError::EmptyReply)
}
