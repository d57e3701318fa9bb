//! 核心服务
//!
//! 封装 webspaces-core 的各种视图服务，在自有的 tokio 运行时上执行网关调用，
//! 结果通过通道送回主循环。

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use webspaces_core::ServiceContext;
use webspaces_core::services::{
    ConfigsService, ConsoleService, DomainService, PortsService, PowerService, SessionService,
    SetupService, StatusService,
};
use webspaces_gateway::{HttpWebspaceApi, ReqwestTransport, TransportOptions, WebspaceApi};

use super::command::{Command, Request};
use super::config_service::AppConfig;
use crate::message::{RemoteMessage, RemoteResult};

/// TUI 核心服务
///
/// 持有服务上下文和运行时，提供给主循环调用
pub struct CoreService {
    /// 服务上下文（供各服务使用）
    ctx: Arc<ServiceContext>,
    runtime: Runtime,
    tx: UnboundedSender<RemoteMessage>,
    rx: UnboundedReceiver<RemoteMessage>,
}

impl CoreService {
    /// 按配置创建基于 HTTP 的核心服务
    pub fn new(config: &AppConfig) -> Result<Self> {
        let options = TransportOptions::new(config.api_base_url.clone())
            .with_user(config.user.clone())
            .with_timeout(Duration::from_secs(config.request_timeout_secs));
        let transport = ReqwestTransport::new(options)?;
        let api = HttpWebspaceApi::new(Arc::new(transport)).with_get_retries(config.get_retries);

        log::info!(
            "[backend] Using API at {} (timeout {}s, {} GET retries)",
            config.api_base_url,
            config.request_timeout_secs,
            config.get_retries
        );
        Self::with_api(Arc::new(api))
    }

    /// 注入任意 `WebspaceApi` 实现
    pub fn with_api(api: Arc<dyn WebspaceApi>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("webspaces-backend")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            ctx: Arc::new(ServiceContext::new(api)),
            runtime,
            tx,
            rx,
        })
    }

    /// 在后台执行请求；结果稍后通过 `try_recv` 取回
    pub fn dispatch(&self, request: Request) {
        let ctx = self.ctx.clone();
        let tx = self.tx.clone();
        log::debug!(
            "[backend] Dispatching {:?} (generation {})",
            request.command.action(),
            request.generation
        );

        self.runtime.spawn(async move {
            let result = execute(ctx, request.command).await;
            let message = RemoteMessage {
                generation: request.generation,
                result,
            };
            if tx.send(message).is_err() {
                log::debug!("[backend] Main loop gone, dropping result");
            }
        });
    }

    /// 取回一个已完成的结果（非阻塞）
    pub fn try_recv(&mut self) -> Option<RemoteMessage> {
        self.rx.try_recv().ok()
    }
}

async fn execute(ctx: Arc<ServiceContext>, command: Command) -> RemoteResult {
    match command {
        Command::Login { email, password } => {
            RemoteResult::LoggedIn(SessionService::new(ctx).login(&email, &password).await)
        }
        Command::FetchConfigs => RemoteResult::ConfigsFetched(ConfigsService::new(ctx).fetch().await),
        Command::SubmitConfigs(form) => {
            RemoteResult::ConfigsSubmitted(ConfigsService::new(ctx).submit(&form).await)
        }
        Command::FetchDomains => RemoteResult::DomainsFetched(DomainService::new(ctx).fetch().await),
        Command::AddDomain(domain) => {
            RemoteResult::DomainAdded(DomainService::new(ctx).add(&domain).await)
        }
        Command::SubmitPorts(form) => {
            RemoteResult::PortsSubmitted(PortsService::new(ctx).submit(&form).await)
        }
        Command::ChooseOs(os) => RemoteResult::OsChosen {
            os,
            effect: SetupService::new(ctx).choose_os(os).await,
        },
        Command::SetRootPassword {
            password,
            confirm,
            ssh,
        } => RemoteResult::RootPasswordSet(
            SetupService::new(ctx)
                .set_root_password(&password, &confirm, &ssh)
                .await,
        ),
        Command::FetchStatus => RemoteResult::StatusFetched(StatusService::new(ctx).fetch().await),
        Command::Power(action) => RemoteResult::PowerApplied {
            action,
            effect: PowerService::new(ctx).apply(action).await,
        },
        Command::DeleteWebspace => {
            RemoteResult::WebspaceDeleted(PowerService::new(ctx).delete().await)
        }
        Command::RemoveDomain(domain) => {
            RemoteResult::DomainRemoved(DomainService::new(ctx).remove(&domain).await)
        }
        Command::FetchPorts => RemoteResult::PortsFetched(PortsService::new(ctx).fetch().await),
        Command::RemovePort(external) => {
            RemoteResult::PortRemoved(PortsService::new(ctx).remove(external).await)
        }
        Command::FetchLog => RemoteResult::LogFetched(ConsoleService::new(ctx).fetch().await),
        Command::ClearLog => RemoteResult::LogCleared(ConsoleService::new(ctx).clear().await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use webspaces_core::ViewEffect;
    use webspaces_gateway::{
        Configs, Envelope, LoginKind, OsChoice, PortMap, PortMapping, PowerAction, WebspaceState,
    };

    /// 固定应答的 API
    struct StaticApi;

    #[async_trait]
    impl WebspaceApi for StaticApi {
        async fn login(&self, _email: &str, _password: &str) -> Envelope<LoginKind> {
            Envelope::Ok(LoginKind::FirstLogin)
        }
        async fn get_configs(&self) -> Envelope<Configs> {
            Envelope::Ok(Configs {
                http: json!("80"),
                https: json!("443"),
                startup: json!("5"),
                ssl: json!(false),
            })
        }
        async fn submit_configs(&self, _configs: &Configs) -> Envelope<()> {
            Envelope::Ok(())
        }
        async fn get_domains(&self) -> Envelope<Vec<String>> {
            Envelope::Ok(vec!["a.example".into()])
        }
        async fn add_domain(&self, domain: &str) -> Envelope<String> {
            Envelope::Ok(domain.to_string())
        }
        async fn submit_ports(&self, _ports: &PortMapping) -> Envelope<()> {
            Envelope::Ok(())
        }
        async fn choose_os(&self, _os: OsChoice) -> Envelope<()> {
            Envelope::rejected("no")
        }
        async fn set_root_password(&self, _p: &str, _c: &str, _s: &str) -> Envelope<()> {
            Envelope::Ok(())
        }
        async fn state(&self) -> Envelope<WebspaceState> {
            Envelope::Ok(WebspaceState::default())
        }
        async fn set_power(&self, _action: PowerAction) -> Envelope<()> {
            Envelope::Ok(())
        }
        async fn delete_webspace(&self) -> Envelope<()> {
            Envelope::Ok(())
        }
        async fn remove_domain(&self, _domain: &str) -> Envelope<()> {
            Envelope::rejected("domain not found")
        }
        async fn get_ports(&self) -> Envelope<PortMap> {
            Envelope::Ok(PortMap::from([(20000, 22)]))
        }
        async fn remove_port(&self, _external: u16) -> Envelope<()> {
            Envelope::Ok(())
        }
        async fn console_log(&self) -> Envelope<String> {
            Envelope::Ok("login: ".into())
        }
        async fn clear_console_log(&self) -> Envelope<()> {
            Envelope::Ok(())
        }
    }

    fn wait(service: &mut CoreService) -> RemoteMessage {
        for _ in 0..200 {
            if let Some(msg) = service.try_recv() {
                return msg;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("no result within 2s");
    }

    #[test]
    fn results_carry_the_request_generation() {
        let mut service = CoreService::with_api(Arc::new(StaticApi)).unwrap();
        service.dispatch(Request {
            generation: 7,
            command: Command::Login {
                email: "a@b.c".into(),
                password: "pw".into(),
            },
        });

        let msg = wait(&mut service);
        assert_eq!(msg.generation, 7);
        assert!(matches!(
            msg.result,
            RemoteResult::LoggedIn(ViewEffect::Redirect(ref p)) if p == "/welcome"
        ));
    }

    #[test]
    fn os_choice_is_echoed_with_its_effect() {
        let mut service = CoreService::with_api(Arc::new(StaticApi)).unwrap();
        service.dispatch(Request {
            generation: 1,
            command: Command::ChooseOs(OsChoice::Debian),
        });

        match wait(&mut service).result {
            RemoteResult::OsChosen { os, effect } => {
                assert_eq!(os, OsChoice::Debian);
                assert_eq!(effect, ViewEffect::Alert("no".into()));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn fetches_map_to_their_results() {
        let mut service = CoreService::with_api(Arc::new(StaticApi)).unwrap();
        service.dispatch(Request {
            generation: 2,
            command: Command::FetchDomains,
        });

        let msg = wait(&mut service);
        assert_eq!(msg.result.action(), webspaces_core::Action::FetchDomains);
        assert!(matches!(
            msg.result,
            RemoteResult::DomainsFetched(ViewEffect::Update(ref d)) if d == &vec!["a.example".to_string()]
        ));
    }

    #[test]
    fn power_results_name_their_action() {
        let mut service = CoreService::with_api(Arc::new(StaticApi)).unwrap();
        service.dispatch(Request {
            generation: 3,
            command: Command::Power(PowerAction::Reboot),
        });

        let msg = wait(&mut service);
        assert_eq!(
            msg.result.action(),
            webspaces_core::Action::Power(PowerAction::Reboot)
        );
        assert!(matches!(
            msg.result,
            RemoteResult::PowerApplied {
                action: PowerAction::Reboot,
                effect: ViewEffect::Update(PowerAction::Reboot)
            }
        ));
    }

    #[test]
    fn refused_domain_removal_is_an_alert() {
        let mut service = CoreService::with_api(Arc::new(StaticApi)).unwrap();
        service.dispatch(Request {
            generation: 4,
            command: Command::RemoveDomain("a.example".into()),
        });

        assert!(matches!(
            wait(&mut service).result,
            RemoteResult::DomainRemoved(ViewEffect::Alert(ref m)) if m == "domain not found"
        ));
    }
}
