//! 共享测试工具：可编排响应的 Mock 传输层

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use webspaces_gateway::{GatewayError, HttpWebspaceApi, RawResponse, RemoteRequest, Transport};

/// 按顺序返回预设响应，并记录收到的每个请求
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, GatewayError>>>,
    requests: Mutex<Vec<RemoteRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个 200 JSON 响应
    pub fn reply_json(self, body: serde_json::Value) -> Self {
        self.push(Ok(RawResponse::new(200, body.to_string())));
        self
    }

    /// 追加一个纯文本响应（204 时为空）
    pub fn reply_text(self, status: u16, body: &str) -> Self {
        self.push(Ok(RawResponse::new(status, body)));
        self
    }

    /// 追加一个错误
    pub fn reply_err(self, err: GatewayError) -> Self {
        self.push(Err(err));
        self
    }

    fn push(&self, response: Result<RawResponse, GatewayError>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }

    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &RemoteRequest) -> Result<RawResponse, GatewayError> {
        if let Ok(mut log) = self.requests.lock() {
            log.push(request.clone());
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or_else(|| {
                Err(GatewayError::NetworkError {
                    endpoint: request.path.clone(),
                    detail: "no scripted response".to_string(),
                })
            })
    }
}

/// 用给定的 Mock 构建 API（不等待重试退避以外的任何东西）
pub fn api_with(transport: &Arc<MockTransport>) -> HttpWebspaceApi {
    HttpWebspaceApi::new(transport.clone())
}

pub fn http_error(endpoint: &str, status: u16, message: Option<&str>) -> GatewayError {
    GatewayError::Http {
        endpoint: endpoint.to_string(),
        status,
        message: message.map(String::from),
    }
}

pub fn network_error(endpoint: &str) -> GatewayError {
    GatewayError::NetworkError {
        endpoint: endpoint.to_string(),
        detail: "connection refused".to_string(),
    }
}
