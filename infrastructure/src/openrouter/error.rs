//! Error types for the OpenRouter adapter

use dialectic_application::GatewayError;
use thiserror::Error;

/// Errors that can occur when talking to an OpenRouter-compatible API
#[derive(Error, Debug)]
pub enum OpenRouterError {
    #[error("API key not found: set {env} or provider.api_key")]
    MissingApiKey { env: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Could not reach {url}: {message}")]
    Connection { url: String, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Response contained no message content")]
    EmptyResponse,
}

impl OpenRouterError {
    pub(crate) fn from_transport(url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            OpenRouterError::Timeout
        } else if e.is_connect() {
            OpenRouterError::Connection {
                url: url.to_string(),
                message: e.to_string(),
            }
        } else if e.is_decode() {
            OpenRouterError::Parse(e.to_string())
        } else {
            OpenRouterError::Connection {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    }
}

impl From<OpenRouterError> for GatewayError {
    fn from(e: OpenRouterError) -> Self {
        match e {
            OpenRouterError::MissingApiKey { .. } => GatewayError::AuthenticationFailed(e.to_string()),
            OpenRouterError::Http { status: 401 | 403, .. } => {
                GatewayError::AuthenticationFailed(e.to_string())
            }
            OpenRouterError::Http { status: 404, .. } => GatewayError::ModelNotAvailable(e.to_string()),
            OpenRouterError::Http { .. } | OpenRouterError::Api(_) => {
                GatewayError::RequestFailed(e.to_string())
            }
            OpenRouterError::Connection { .. } => GatewayError::ConnectionError(e.to_string()),
            OpenRouterError::Timeout => GatewayError::Timeout,
            OpenRouterError::Parse(_) | OpenRouterError::EmptyResponse => {
                GatewayError::InvalidResponse(e.to_string())
            }
            OpenRouterError::ClientBuild(_) => GatewayError::Other(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> OpenRouterError {
        OpenRouterError::Http {
            status,
            body: "{}".to_string(),
        }
    }

    #[test]
    fn test_gateway_error_mapping() {
        assert!(matches!(
            GatewayError::from(http(401)),
            GatewayError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            GatewayError::from(http(404)),
            GatewayError::ModelNotAvailable(_)
        ));
        assert!(matches!(
            GatewayError::from(http(502)),
            GatewayError::RequestFailed(_)
        ));
        assert!(matches!(
            GatewayError::from(OpenRouterError::Timeout),
            GatewayError::Timeout
        ));
        assert!(matches!(
            GatewayError::from(OpenRouterError::EmptyResponse),
            GatewayError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_http_message_keeps_body() {
        let e = OpenRouterError::Http {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 429: rate limited");
    }
}
