use serde::{Deserialize, Serialize};

/// Unified error type for every request issued through the gateway.
///
/// Each variant carries the `endpoint` path that produced it. All variants are
/// serializable so the UI layer can keep them in its model and log them
/// structurally.
///
/// # Retryable Errors
///
/// - [`NetworkError`](Self::NetworkError) — connection refused, DNS failure, ...
/// - [`Timeout`](Self::Timeout) — the configured request timeout elapsed
/// - [`Http`](Self::Http) with status 502, 503 or 504
///
/// Only idempotent `GET` requests are ever retried; see
/// [`send_with_retry`](crate::send_with_retry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GatewayError {
    /// A network-level error occurred before any response was received.
    NetworkError {
        /// Endpoint path.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The request did not complete within the configured timeout.
    Timeout {
        /// Endpoint path.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The backend answered with an HTTP error status (>= 400).
    Http {
        /// Endpoint path.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, when the backend supplies one.
        message: Option<String>,
    },

    /// The response body could not be decoded.
    ParseError {
        /// Endpoint path.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The request body could not be serialized.
    SerializationError {
        /// Endpoint path.
        endpoint: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The response decoded, but its discriminator held a value outside the
    /// set the endpoint is known to produce.
    UnexpectedDiscriminator {
        /// Endpoint path.
        endpoint: String,
        /// Name of the discriminator field (`state`, `result`, ...).
        field: String,
        /// The value that was received.
        value: String,
    },
}

impl GatewayError {
    /// Endpoint path that produced this error.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::NetworkError { endpoint, .. }
            | Self::Timeout { endpoint, .. }
            | Self::Http { endpoint, .. }
            | Self::ParseError { endpoint, .. }
            | Self::SerializationError { endpoint, .. }
            | Self::UnexpectedDiscriminator { endpoint, .. } => endpoint,
        }
    }

    /// 是否为瞬时错误（可以对幂等请求重试）
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError { .. } | Self::Timeout { .. } => true,
            Self::Http { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }

    /// 是否为预期行为（客户端错误状态码），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Http { status, .. } if (400..500).contains(status))
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::Http {
                endpoint,
                status,
                message,
            } => {
                if let Some(msg) = message {
                    write!(f, "[{endpoint}] HTTP {status}: {msg}")
                } else {
                    write!(f, "[{endpoint}] HTTP {status}")
                }
            }
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::SerializationError { endpoint, detail } => {
                write!(f, "[{endpoint}] Serialization error: {detail}")
            }
            Self::UnexpectedDiscriminator {
                endpoint,
                field,
                value,
            } => {
                write!(f, "[{endpoint}] Unexpected {field} value: {value}")
            }
        }
    }
}

impl std::error::Error for GatewayError {}

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = GatewayError::NetworkError {
            endpoint: "/api/login".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[/api/login] Network error: connection refused");
    }

    #[test]
    fn display_http_with_message() {
        let e = GatewayError::Http {
            endpoint: "/api/ports".to_string(),
            status: 409,
            message: Some("port already in use".to_string()),
        };
        assert_eq!(e.to_string(), "[/api/ports] HTTP 409: port already in use");
    }

    #[test]
    fn display_http_without_message() {
        let e = GatewayError::Http {
            endpoint: "/api/ports".to_string(),
            status: 500,
            message: None,
        };
        assert_eq!(e.to_string(), "[/api/ports] HTTP 500");
    }

    #[test]
    fn gateway_statuses_are_retryable() {
        for status in [502, 503, 504] {
            let e = GatewayError::Http {
                endpoint: "/api/getConfigs".into(),
                status,
                message: None,
            };
            assert!(e.is_retryable(), "HTTP {status} should be retryable");
        }
    }

    #[test]
    fn client_errors_are_expected_not_retryable() {
        let e = GatewayError::Http {
            endpoint: "/api/getConfigs".into(),
            status: 401,
            message: None,
        };
        assert!(e.is_expected());
        assert!(!e.is_retryable());
    }

    #[test]
    fn parse_error_is_neither_expected_nor_retryable() {
        let e = GatewayError::ParseError {
            endpoint: "/api/getDomains".into(),
            detail: "eof".into(),
        };
        assert!(!e.is_expected());
        assert!(!e.is_retryable());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = GatewayError::Timeout {
            endpoint: "/api/os".into(),
            detail: "15s".into(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "Timeout");
        assert_eq!(json["endpoint"], "/api/os");
    }
}
