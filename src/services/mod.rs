use crate::config::Config;
use crate::errors::ApiError;
use crate::models::prompt::Message;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use async_trait::async_trait;
use log::warn;
use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;

pub mod formatter;
pub mod openai_service;
pub mod prompts;

use openai_service::OpenAIService;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model returned no completion")]
    EmptyReply,
}

/// A chat model that turns an ordered message list into one reply.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, UpstreamError>;
}

/// Process-wide state shared by every handler.
#[derive(Clone, Default)]
pub struct AppState {
    completion: Option<Arc<dyn CompletionService>>,
}

impl AppState {
    pub fn new(completion: Option<Arc<dyn CompletionService>>) -> Self {
        Self { completion }
    }

    /// Builds the upstream client when an API key is configured.
    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        let completion = match &config.openai_key {
            Some(key) => {
                let service = OpenAIService::new(
                    config.openai_url.clone(),
                    key.clone(),
                    config.model.clone(),
                )?;
                Some(Arc::new(service) as Arc<dyn CompletionService>)
            }
            None => {
                warn!("OPENAI_API_KEY is not set, completion endpoints will answer 500");
                None
            }
        };

        Ok(Self::new(completion))
    }

    pub fn completion(&self) -> Option<Arc<dyn CompletionService>> {
        self.completion.clone()
    }
}

/// The configured completion service, pulled from `AppState`.
///
/// Listed ahead of the payload extractor so a server without an API key
/// answers `NotConfigured` before the body is looked at.
pub struct Completion(Arc<dyn CompletionService>);

impl FromRequest for Completion {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let service = req
            .app_data::<web::Data<AppState>>()
            .and_then(|state| state.completion());

        ready(service.map(Completion).ok_or(ApiError::NotConfigured))
    }
}

impl Deref for Completion {
    type Target = dyn CompletionService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
