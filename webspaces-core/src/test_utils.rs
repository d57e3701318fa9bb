//! 测试辅助模块
//!
//! 提供可编排结果的 `WebspaceApi` mock 和上下文工厂方法。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use webspaces_gateway::{
    Configs, Envelope, LoginKind, OsChoice, PortMap, PortMapping, PowerAction, WebspaceApi,
    WebspaceState,
};

use crate::services::ServiceContext;

// ===== MockWebspaceApi =====

/// 默认全部返回 `Ok`；每次调用记录为一行便于断言
pub struct MockWebspaceApi {
    login: RwLock<Envelope<LoginKind>>,
    configs: RwLock<Envelope<Configs>>,
    submit_configs: RwLock<Envelope<()>>,
    domains: RwLock<Envelope<Vec<String>>>,
    /// None 时回显提交的域名
    add_domain: RwLock<Option<Envelope<String>>>,
    ports: RwLock<Envelope<()>>,
    os: RwLock<Envelope<()>>,
    root: RwLock<Envelope<()>>,
    state: RwLock<Envelope<WebspaceState>>,
    power: RwLock<Envelope<()>>,
    delete_webspace: RwLock<Envelope<()>>,
    remove_domain: RwLock<Envelope<()>>,
    port_map: RwLock<Envelope<PortMap>>,
    remove_port: RwLock<Envelope<()>>,
    console_log: RwLock<Envelope<String>>,
    clear_console_log: RwLock<Envelope<()>>,
    calls: RwLock<Vec<String>>,
}

impl MockWebspaceApi {
    pub fn new() -> Self {
        Self {
            login: RwLock::new(Envelope::Ok(LoginKind::Returning)),
            configs: RwLock::new(Envelope::Ok(Configs::default())),
            submit_configs: RwLock::new(Envelope::Ok(())),
            domains: RwLock::new(Envelope::Ok(Vec::new())),
            add_domain: RwLock::new(None),
            ports: RwLock::new(Envelope::Ok(())),
            os: RwLock::new(Envelope::Ok(())),
            root: RwLock::new(Envelope::Ok(())),
            state: RwLock::new(Envelope::Ok(WebspaceState::default())),
            power: RwLock::new(Envelope::Ok(())),
            delete_webspace: RwLock::new(Envelope::Ok(())),
            remove_domain: RwLock::new(Envelope::Ok(())),
            port_map: RwLock::new(Envelope::Ok(PortMap::new())),
            remove_port: RwLock::new(Envelope::Ok(())),
            console_log: RwLock::new(Envelope::Ok(String::new())),
            clear_console_log: RwLock::new(Envelope::Ok(())),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_login(&self, envelope: Envelope<LoginKind>) {
        *self.login.write().await = envelope;
    }

    pub async fn set_configs(&self, envelope: Envelope<Configs>) {
        *self.configs.write().await = envelope;
    }

    pub async fn set_domains(&self, envelope: Envelope<Vec<String>>) {
        *self.domains.write().await = envelope;
    }

    pub async fn set_add_domain(&self, envelope: Option<Envelope<String>>) {
        *self.add_domain.write().await = envelope;
    }

    pub async fn set_ports(&self, envelope: Envelope<()>) {
        *self.ports.write().await = envelope;
    }

    pub async fn set_os(&self, envelope: Envelope<()>) {
        *self.os.write().await = envelope;
    }

    pub async fn set_root(&self, envelope: Envelope<()>) {
        *self.root.write().await = envelope;
    }

    pub async fn set_state(&self, envelope: Envelope<WebspaceState>) {
        *self.state.write().await = envelope;
    }

    pub async fn set_power_reply(&self, envelope: Envelope<()>) {
        *self.power.write().await = envelope;
    }

    pub async fn set_remove_domain(&self, envelope: Envelope<()>) {
        *self.remove_domain.write().await = envelope;
    }

    pub async fn set_port_map(&self, envelope: Envelope<PortMap>) {
        *self.port_map.write().await = envelope;
    }

    pub async fn set_console_log(&self, envelope: Envelope<String>) {
        *self.console_log.write().await = envelope;
    }

    pub async fn set_clear_console_log(&self, envelope: Envelope<()>) {
        *self.clear_console_log.write().await = envelope;
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: String) {
        self.calls.write().await.push(call);
    }
}

#[async_trait]
impl WebspaceApi for MockWebspaceApi {
    async fn login(&self, email: &str, _password: &str) -> Envelope<LoginKind> {
        self.record(format!("login {email}")).await;
        self.login.read().await.clone()
    }

    async fn get_configs(&self) -> Envelope<Configs> {
        self.record("get_configs".to_string()).await;
        self.configs.read().await.clone()
    }

    async fn submit_configs(&self, configs: &Configs) -> Envelope<()> {
        let body = serde_json::to_string(configs).unwrap_or_default();
        self.record(format!("submit_configs {body}")).await;
        self.submit_configs.read().await.clone()
    }

    async fn get_domains(&self) -> Envelope<Vec<String>> {
        self.record("get_domains".to_string()).await;
        self.domains.read().await.clone()
    }

    async fn add_domain(&self, domain: &str) -> Envelope<String> {
        self.record(format!("add_domain {domain}")).await;
        self.add_domain
            .read()
            .await
            .clone()
            .unwrap_or_else(|| Envelope::Ok(domain.to_string()))
    }

    async fn submit_ports(&self, ports: &PortMapping) -> Envelope<()> {
        self.record(format!(
            "submit_ports {} {} {} {}",
            ports.external1, ports.external2, ports.internal1, ports.internal2
        ))
        .await;
        self.ports.read().await.clone()
    }

    async fn choose_os(&self, os: OsChoice) -> Envelope<()> {
        self.record(format!("choose_os {}", os.id())).await;
        self.os.read().await.clone()
    }

    async fn set_root_password(&self, _password: &str, _confirm: &str, ssh: &str) -> Envelope<()> {
        self.record(format!("set_root_password ssh={ssh}")).await;
        self.root.read().await.clone()
    }

    async fn state(&self) -> Envelope<WebspaceState> {
        self.record("state".to_string()).await;
        self.state.read().await.clone()
    }

    async fn set_power(&self, action: PowerAction) -> Envelope<()> {
        self.record(format!("set_power {action:?}")).await;
        self.power.read().await.clone()
    }

    async fn delete_webspace(&self) -> Envelope<()> {
        self.record("delete_webspace".to_string()).await;
        self.delete_webspace.read().await.clone()
    }

    async fn remove_domain(&self, domain: &str) -> Envelope<()> {
        self.record(format!("remove_domain {domain}")).await;
        self.remove_domain.read().await.clone()
    }

    async fn get_ports(&self) -> Envelope<PortMap> {
        self.record("get_ports".to_string()).await;
        self.port_map.read().await.clone()
    }

    async fn remove_port(&self, external: u16) -> Envelope<()> {
        self.record(format!("remove_port {external}")).await;
        self.remove_port.read().await.clone()
    }

    async fn console_log(&self) -> Envelope<String> {
        self.record("console_log".to_string()).await;
        self.console_log.read().await.clone()
    }

    async fn clear_console_log(&self) -> Envelope<()> {
        self.record("clear_console_log".to_string()).await;
        self.clear_console_log.read().await.clone()
    }
}

// ===== 工厂方法 =====

/// 用给定 mock 构建服务上下文，同时返回 mock 句柄以便断言
pub fn context_with(api: MockWebspaceApi) -> (Arc<ServiceContext>, Arc<MockWebspaceApi>) {
    let api = Arc::new(api);
    let ctx = Arc::new(ServiceContext::new(api.clone()));
    (ctx, api)
}
