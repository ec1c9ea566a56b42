use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai_url: String,
    pub openai_key: Option<String>,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("SERVER_PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| {
                    format!("SERVER_PORT must be a valid port number, got {:?}", value)
                })?,
            None => 8080,
        };

        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            openai_url: lookup("OPENAI_URL").unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
            // an empty key is as good as none
            openai_key: lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty()),
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}
