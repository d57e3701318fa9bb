//! 传输层：把一个 `RemoteRequest` 变成一次 HTTP 调用

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{GatewayError, Result};
use crate::http_client::HttpUtils;
use crate::types::{Method, RawResponse, RemoteRequest};
use crate::utils::log_sanitizer::redact_for_log;

/// 默认请求超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// 成员身份请求头
pub const USER_HEADER: &str = "X-Webspace-User";

/// 传输 Trait
///
/// 发送一次请求，返回且仅返回一个结果（响应或错误），不做任何重试。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RemoteRequest) -> Result<RawResponse>;
}

/// 传输配置
#[derive(Debug, Clone)]
pub struct TransportOptions {
    /// API 根地址，如 `http://localhost:5000`
    pub base_url: String,
    /// 可选的成员身份（以 `X-Webspace-User` 头发送）
    pub user: Option<String>,
    /// 单次请求超时
    pub timeout: Duration,
}

impl TransportOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_user(mut self, user: Option<String>) -> Self {
        self.user = user.filter(|u| !u.is_empty());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// 基于 reqwest 的传输实现
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    user: Option<String>,
}

impl ReqwestTransport {
    pub fn new(options: TransportOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| GatewayError::NetworkError {
                endpoint: options.base_url.clone(),
                detail: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            user: options.user,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &RemoteRequest) -> Result<RawResponse> {
        let url = self.url(&request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(user) = &self.user {
            builder = builder.header(USER_HEADER, user);
        }

        if let Some(body) = &request.body {
            log::debug!("[gateway] {} Request Body: {}", request.path, redact_for_log(body));
            builder = builder.json(body);
        }

        let (status, body) =
            HttpUtils::execute_request(builder, request.method.as_str(), &request.path).await?;

        Ok(RawResponse::new(status, body))
    }
}
