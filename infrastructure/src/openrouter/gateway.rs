//! OpenRouter gateway implementation

use super::error::OpenRouterError;
use super::session::OpenRouterSession;
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use dialectic_application::{GatewayError, LlmGateway, LlmSession};
use dialectic_domain::Model;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Resolved provider settings shared by every session.
#[derive(Clone)]
pub struct OpenRouterConfig {
    pub base_url: String,
    pub api_key: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub timeout: Duration,
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OpenRouterConfig {
    /// Resolve the file config, reading the API key from the process environment.
    pub fn from_file(config: &FileProviderConfig) -> Result<Self, OpenRouterError> {
        Self::from_file_with_env(config, |name| std::env::var(name).ok())
    }

    /// Resolve the file config with an explicit environment lookup.
    ///
    /// An explicit `api_key` wins over the variable named by `api_key_env`.
    pub fn from_file_with_env(
        config: &FileProviderConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, OpenRouterError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| env(&config.api_key_env).filter(|key| !key.trim().is_empty()))
            .ok_or_else(|| OpenRouterError::MissingApiKey {
                env: config.api_key_env.clone(),
            })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Gateway to an OpenRouter-compatible chat-completions API
pub struct OpenRouterGateway {
    client: reqwest::Client,
    config: Arc<OpenRouterConfig>,
}

impl OpenRouterGateway {
    pub fn new(config: OpenRouterConfig) -> Result<Self, OpenRouterError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(OpenRouterError::ClientBuild)?;

        info!("Using chat-completions endpoint {}", config.completions_url());
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenRouterSession::new(
            self.client.clone(),
            Arc::clone(&self.config),
            model.clone(),
            None,
        )))
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenRouterSession::new(
            self.client.clone(),
            Arc::clone(&self.config),
            model.clone(),
            Some(system_prompt.to_string()),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_explicit_key_wins() {
        let file = FileProviderConfig {
            api_key: Some("sk-explicit".to_string()),
            ..Default::default()
        };
        let config =
            OpenRouterConfig::from_file_with_env(&file, |_| Some("sk-env".to_string())).unwrap();
        assert_eq!(config.api_key, "sk-explicit");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_key_from_named_env_var() {
        let file = FileProviderConfig::default();
        let config = OpenRouterConfig::from_file_with_env(&file, |name| {
            (name == "OPENROUTER_API_KEY").then(|| "sk-env".to_string())
        })
        .unwrap();
        assert_eq!(config.api_key, "sk-env");
    }

    #[test]
    fn test_missing_key() {
        let err =
            OpenRouterConfig::from_file_with_env(&FileProviderConfig::default(), no_env).unwrap_err();
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let file = FileProviderConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let config = OpenRouterConfig::from_file_with_env(&file, no_env).unwrap();
        assert!(!format!("{config:?}").contains("sk-secret"));
    }

    #[test]
    fn test_completions_url_joins_cleanly() {
        let file = FileProviderConfig {
            base_url: "https://openrouter.ai/api/v1/".to_string(),
            api_key: Some("k".to_string()),
            ..Default::default()
        };
        let config = OpenRouterConfig::from_file_with_env(&file, no_env).unwrap();
        assert_eq!(
            config.completions_url(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    /// Serve exactly one HTTP request with a canned response; return the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request).to_string();
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let lower = line.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).to_string()
        });
        (base_url, handle)
    }

    fn gateway(base_url: String) -> OpenRouterGateway {
        OpenRouterGateway::new(OpenRouterConfig {
            base_url,
            api_key: "sk-test".to_string(),
            temperature: 0.1,
            max_tokens: None,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_posts_chat_completion() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"{\"final_answer\":\"1963\"}"}}]}"#,
        )
        .await;

        let session = gateway(base_url)
            .create_session_with_system_prompt(&Model::Gpt4oMini, "You are the judge.")
            .await
            .unwrap();
        let reply = session.send("Decide.").await.unwrap();
        assert_eq!(reply, r#"{"final_answer":"1963"}"#);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /chat/completions"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains(r#""model":"openai/gpt-4o-mini""#));
        assert!(request.contains(r#""role":"system","content":"You are the judge.""#));
    }

    #[tokio::test]
    async fn test_http_error_maps_to_gateway_error() {
        let (base_url, server) = serve_once("401 Unauthorized", r#"{"error":{"message":"bad key"}}"#).await;

        let session = gateway(base_url).create_session(&Model::Gpt4oMini).await.unwrap();
        let err = session.send("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::AuthenticationFailed(_)));
        server.await.unwrap();
    }
}
