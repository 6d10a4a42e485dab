//! HTTP transport to the local summarizer service (an Ollama-compatible
//! `/api/generate` endpoint). The trait seam exists so the service layer
//! and its tests never need a live endpoint.

use serde::{Deserialize, Serialize};

use super::SummarizerError;
use crate::config;

/// Blocking generation call. Implementations must be cheap to share
/// across threads; the service layer wraps them in an `Arc`.
pub trait SummaryGenerate {
    fn generate(&self, prompt: &str, system: &str) -> Result<String, SummarizerError>;
}

/// Blocking HTTP client with the request timeout baked in at
/// construction, so no individual call can hang past it.
pub struct HttpSummarizer {
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpSummarizer {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Service at the configured URL (env-overridable) with the
    /// standard generation timeout.
    pub fn default_local(model: &str) -> Self {
        Self::new(
            &config::summarizer_base_url(),
            model,
            config::SUMMARIZER_TIMEOUT_SECS,
        )
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl SummaryGenerate for HttpSummarizer {
    fn generate(&self, prompt: &str, system: &str) -> Result<String, SummarizerError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            system,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                SummarizerError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                SummarizerError::Timeout(self.timeout_secs)
            } else {
                SummarizerError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SummarizerError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| SummarizerError::MalformedResponse(e.to_string()))?;

        Ok(parsed.response)
    }
}

/// Canned-response client for tests.
#[cfg(test)]
pub struct MockSummarizer {
    response: Result<String, &'static str>,
    delay: Option<std::time::Duration>,
}

#[cfg(test)]
impl MockSummarizer {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            delay: None,
        }
    }

    pub fn failing(message: &'static str) -> Self {
        Self {
            response: Err(message),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[cfg(test)]
impl SummaryGenerate for MockSummarizer {
    fn generate(&self, _prompt: &str, _system: &str) -> Result<String, SummarizerError> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(SummarizerError::Http((*message).to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_trims_trailing_slash() {
        let client = HttpSummarizer::new("http://localhost:11434/", "medgemma", 30);
        assert_eq!(client.base_url, "http://localhost:11434");
        assert_eq!(client.timeout_secs, 30);
    }

    #[test]
    fn default_local_uses_configured_timeout() {
        let client = HttpSummarizer::default_local("medgemma");
        assert_eq!(client.timeout_secs, config::SUMMARIZER_TIMEOUT_SECS);
    }

    #[test]
    fn mock_returns_configured_response() {
        let client = MockSummarizer::new("hello");
        assert_eq!(client.generate("p", "s").unwrap(), "hello");
    }

    #[test]
    fn mock_failure_surfaces_as_http_error() {
        let client = MockSummarizer::failing("boom");
        assert!(matches!(
            client.generate("p", "s"),
            Err(SummarizerError::Http(_))
        ));
    }
}
