//! Endpoint stubs
//!
//! One method per backend endpoint. Each stub issues exactly one request
//! (plus transient-failure retries for `GET`) and maps the endpoint's own
//! discriminator onto the shared [`Envelope`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::envelope::Envelope;
use crate::error::{GatewayError, Result};
use crate::http_client::{HttpUtils, send_with_retry};
use crate::transport::Transport;
use crate::types::{
    Configs, ConfigsSubmission, DomainEntry, DomainList, DomainSubmission, LoginKind,
    LoginRequest, Method, OsChoice, OsDetails, OsSubmission, PortMap, PortMapping,
    PortsSubmission, PowerAction, RemoteRequest, ResultReply, RootPasswordDetails,
    RootPasswordSubmission, StateReply, WebspaceState,
};

/// Backend endpoint paths.
pub mod endpoints {
    pub const LOGIN: &str = "/api/login";
    pub const GET_CONFIGS: &str = "/api/getConfigs";
    pub const SUBMIT_CONFIGS: &str = "/api/submitConfigs";
    pub const GET_DOMAINS: &str = "/api/getDomains";
    pub const DOMAINS: &str = "/api/domains";
    pub const PORTS: &str = "/api/ports";
    pub const OS: &str = "/api/os";
    pub const ROOT: &str = "/api/root";
    pub const STATE: &str = "/api/state";
    pub const WEBSPACE: &str = "/api/webspace";
    pub const LOG: &str = "/api/log";

    /// `/api/domains/{domain}`; the domain is percent-encoded.
    pub fn domain(domain: &str) -> String {
        format!("{DOMAINS}/{}", urlencoding::encode(domain))
    }

    /// `/api/ports/{port}`
    pub fn port(external: u16) -> String {
        format!("{PORTS}/{external}")
    }
}

/// Default number of retries for idempotent reads.
pub const DEFAULT_GET_RETRIES: u32 = 2;

pub const MSG_INVALID_LOGIN: &str = "Invalid email or password";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_CONFIGS_REJECTED: &str = "Configuration was not accepted";
pub const MSG_PORTS_REJECTED: &str = "Port mapping was not accepted";
pub const MSG_OS_REJECTED: &str = "Operating system selection was not accepted";

/// Webspaces backend API
///
/// Every method returns an [`Envelope`]; transport failures are reported as
/// [`Envelope::Error`], never as a panic or a silently dropped result.
#[async_trait]
pub trait WebspaceApi: Send + Sync {
    /// `POST /api/login`
    async fn login(&self, email: &str, password: &str) -> Envelope<LoginKind>;

    /// `GET /api/getConfigs`
    async fn get_configs(&self) -> Envelope<Configs>;

    /// `POST /api/submitConfigs`
    async fn submit_configs(&self, configs: &Configs) -> Envelope<()>;

    /// `GET /api/getDomains`
    async fn get_domains(&self) -> Envelope<Vec<String>>;

    /// `POST /api/domains`; the `Ok` detail is the domain echoed by the backend.
    async fn add_domain(&self, domain: &str) -> Envelope<String>;

    /// `POST /api/ports`
    async fn submit_ports(&self, ports: &PortMapping) -> Envelope<()>;

    /// `POST /api/os`
    async fn choose_os(&self, os: OsChoice) -> Envelope<()>;

    /// `POST /api/root`
    async fn set_root_password(&self, password: &str, confirm: &str, ssh: &str) -> Envelope<()>;

    /// `GET /api/state`
    async fn state(&self) -> Envelope<WebspaceState>;

    /// `POST` (boot), `PUT` (reboot) or `DELETE` (shut down) `/api/state`
    async fn set_power(&self, action: PowerAction) -> Envelope<()>;

    /// `DELETE /api/webspace`
    async fn delete_webspace(&self) -> Envelope<()>;

    /// `DELETE /api/domains/{domain}`
    async fn remove_domain(&self, domain: &str) -> Envelope<()>;

    /// `GET /api/ports`
    async fn get_ports(&self) -> Envelope<PortMap>;

    /// `DELETE /api/ports/{port}`
    async fn remove_port(&self, external: u16) -> Envelope<()>;

    /// `GET /api/log`; the body is plain text.
    async fn console_log(&self) -> Envelope<String>;

    /// `DELETE /api/log`
    async fn clear_console_log(&self) -> Envelope<()>;
}

/// HTTP implementation of [`WebspaceApi`] on top of any [`Transport`].
pub struct HttpWebspaceApi {
    transport: Arc<dyn Transport>,
    get_retries: u32,
}

impl HttpWebspaceApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            get_retries: DEFAULT_GET_RETRIES,
        }
    }

    #[must_use]
    pub fn with_get_retries(mut self, retries: u32) -> Self {
        self.get_retries = retries;
        self
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let request = RemoteRequest::get(path);
        let raw = send_with_retry(self.transport.as_ref(), &request, self.get_retries).await?;
        HttpUtils::parse_json(&raw.body, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let request = RemoteRequest::post(path, body)?;
        let raw = self.transport.send(&request).await?;
        HttpUtils::parse_json(&raw.body, path)
    }

    /// 无请求体、无响应体的操作（204）
    ///
    /// 4xx 且带 `message` 的错误体视为后端拒绝，其余失败为 `Error`。
    async fn command(&self, method: Method, path: &str) -> Envelope<()> {
        let request = RemoteRequest::bare(method, path);
        match self.transport.send(&request).await {
            Ok(_) => Envelope::Ok(()),
            Err(GatewayError::Http {
                status,
                message: Some(message),
                ..
            }) if (400..500).contains(&status) => {
                log::warn!("[gateway] {} {path} refused: {message}", method.as_str());
                Envelope::Rejected(message)
            }
            Err(err) => Envelope::from_result(Err(err)),
        }
    }
}

fn unexpected(endpoint: &str, field: &str, value: impl ToString) -> GatewayError {
    GatewayError::UnexpectedDiscriminator {
        endpoint: endpoint.to_string(),
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[async_trait]
impl WebspaceApi for HttpWebspaceApi {
    async fn login(&self, email: &str, password: &str) -> Envelope<LoginKind> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        Envelope::from_result(
            self.post_json::<_, StateReply<i64>>(endpoints::LOGIN, &body)
                .await
                .and_then(|reply| match reply.state {
                    0 => Ok(Envelope::rejected(MSG_INVALID_LOGIN)),
                    1 => Ok(Envelope::Ok(LoginKind::FirstLogin)),
                    2 => Ok(Envelope::Ok(LoginKind::Returning)),
                    other => Err(unexpected(endpoints::LOGIN, "state", other)),
                }),
        )
    }

    async fn get_configs(&self) -> Envelope<Configs> {
        Envelope::from_result(
            self.get_json::<Configs>(endpoints::GET_CONFIGS)
                .await
                .map(Envelope::Ok),
        )
    }

    async fn submit_configs(&self, configs: &Configs) -> Envelope<()> {
        let body = ConfigsSubmission {
            configs: configs.clone(),
        };
        Envelope::from_result(
            self.post_json::<_, StateReply<bool>>(endpoints::SUBMIT_CONFIGS, &body)
                .await
                .map(|reply| {
                    if reply.state {
                        Envelope::Ok(())
                    } else {
                        Envelope::rejected(MSG_CONFIGS_REJECTED)
                    }
                }),
        )
    }

    async fn get_domains(&self) -> Envelope<Vec<String>> {
        Envelope::from_result(
            self.get_json::<DomainList>(endpoints::GET_DOMAINS)
                .await
                .map(|list| Envelope::Ok(list.domains)),
        )
    }

    async fn add_domain(&self, domain: &str) -> Envelope<String> {
        let body = DomainSubmission {
            to_submit: DomainEntry {
                domain: domain.to_string(),
            },
        };
        Envelope::from_result(
            self.post_json::<_, ResultReply>(endpoints::DOMAINS, &body)
                .await
                .map(|reply| {
                    if reply.result {
                        Envelope::Ok(reply.domain.unwrap_or_else(|| domain.to_string()))
                    } else {
                        Envelope::rejected(format!("Domain {domain} was not accepted"))
                    }
                }),
        )
    }

    async fn submit_ports(&self, ports: &PortMapping) -> Envelope<()> {
        let body = PortsSubmission { details: *ports };
        Envelope::from_result(
            self.post_json::<_, ResultReply>(endpoints::PORTS, &body)
                .await
                .map(|reply| {
                    if reply.result {
                        Envelope::Ok(())
                    } else {
                        Envelope::rejected(MSG_PORTS_REJECTED)
                    }
                }),
        )
    }

    async fn choose_os(&self, os: OsChoice) -> Envelope<()> {
        let body = OsSubmission {
            details: OsDetails { os: os.id() },
        };
        Envelope::from_result(
            self.post_json::<_, StateReply<i64>>(endpoints::OS, &body)
                .await
                .map(|reply| {
                    if reply.state == 1 {
                        Envelope::Ok(())
                    } else {
                        Envelope::rejected(MSG_OS_REJECTED)
                    }
                }),
        )
    }

    async fn set_root_password(&self, password: &str, confirm: &str, ssh: &str) -> Envelope<()> {
        let body = RootPasswordSubmission {
            details: RootPasswordDetails {
                password: password.to_string(),
                confirm: confirm.to_string(),
                ssh: ssh.to_string(),
            },
        };
        Envelope::from_result(
            self.post_json::<_, StateReply<i64>>(endpoints::ROOT, &body)
                .await
                .and_then(|reply| match reply.state {
                    1 => Ok(Envelope::Ok(())),
                    0 => Ok(Envelope::rejected(MSG_PASSWORD_MISMATCH)),
                    other => Err(unexpected(endpoints::ROOT, "state", other)),
                }),
        )
    }

    async fn state(&self) -> Envelope<WebspaceState> {
        Envelope::from_result(
            self.get_json::<WebspaceState>(endpoints::STATE)
                .await
                .map(Envelope::Ok),
        )
    }

    async fn set_power(&self, action: PowerAction) -> Envelope<()> {
        self.command(action.method(), endpoints::STATE).await
    }

    async fn delete_webspace(&self) -> Envelope<()> {
        self.command(Method::Delete, endpoints::WEBSPACE).await
    }

    async fn remove_domain(&self, domain: &str) -> Envelope<()> {
        self.command(Method::Delete, &endpoints::domain(domain)).await
    }

    async fn get_ports(&self) -> Envelope<PortMap> {
        Envelope::from_result(
            self.get_json::<PortMap>(endpoints::PORTS)
                .await
                .map(Envelope::Ok),
        )
    }

    async fn remove_port(&self, external: u16) -> Envelope<()> {
        self.command(Method::Delete, &endpoints::port(external)).await
    }

    async fn console_log(&self) -> Envelope<String> {
        let request = RemoteRequest::get(endpoints::LOG);
        Envelope::from_result(
            send_with_retry(self.transport.as_ref(), &request, self.get_retries)
                .await
                .map(|raw| Envelope::Ok(raw.body)),
        )
    }

    async fn clear_console_log(&self) -> Envelope<()> {
        self.command(Method::Delete, endpoints::LOG).await
    }
}
