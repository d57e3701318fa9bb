//! 集成测试共享工具

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use webspaces_core::ServiceContext;
use webspaces_gateway::{
    Configs, Envelope, LoginKind, OsChoice, PortMap, PortMapping, PowerAction, WebspaceApi,
    WebspaceState,
};

/// 一个“后端”：记住所选系统，root 密码两次一致才接受
#[derive(Default)]
pub struct FakeBackend {
    pub first_login: bool,
    pub os: Mutex<Option<u8>>,
    pub domains: Mutex<Vec<String>>,
    pub running: Mutex<bool>,
    pub posts: Mutex<usize>,
}

impl FakeBackend {
    fn count_post(&self) {
        if let Ok(mut posts) = self.posts.lock() {
            *posts += 1;
        }
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().map(|p| *p).unwrap_or_default()
    }
}

#[async_trait]
impl WebspaceApi for FakeBackend {
    async fn login(&self, _email: &str, password: &str) -> Envelope<LoginKind> {
        self.count_post();
        match (password, self.first_login) {
            ("", _) | ("wrong", _) => Envelope::rejected("Invalid email or password"),
            (_, true) => Envelope::Ok(LoginKind::FirstLogin),
            (_, false) => Envelope::Ok(LoginKind::Returning),
        }
    }

    async fn get_configs(&self) -> Envelope<Configs> {
        Envelope::Ok(Configs {
            http: json!("80"),
            https: json!("443"),
            startup: json!("0"),
            ssl: json!(true),
        })
    }

    async fn submit_configs(&self, _configs: &Configs) -> Envelope<()> {
        self.count_post();
        Envelope::Ok(())
    }

    async fn get_domains(&self) -> Envelope<Vec<String>> {
        Envelope::Ok(self.domains.lock().map(|d| d.clone()).unwrap_or_default())
    }

    async fn add_domain(&self, domain: &str) -> Envelope<String> {
        self.count_post();
        if let Ok(mut domains) = self.domains.lock() {
            domains.push(domain.to_string());
        }
        Envelope::Ok(domain.to_string())
    }

    async fn submit_ports(&self, _ports: &PortMapping) -> Envelope<()> {
        self.count_post();
        Envelope::Ok(())
    }

    async fn choose_os(&self, os: OsChoice) -> Envelope<()> {
        self.count_post();
        if let Ok(mut chosen) = self.os.lock() {
            *chosen = Some(os.id());
        }
        Envelope::Ok(())
    }

    async fn set_root_password(&self, password: &str, confirm: &str, _ssh: &str) -> Envelope<()> {
        self.count_post();
        if password == confirm {
            Envelope::Ok(())
        } else {
            Envelope::rejected("Passwords do not match")
        }
    }

    async fn state(&self) -> Envelope<WebspaceState> {
        let os = self
            .os
            .lock()
            .ok()
            .and_then(|os| *os)
            .and_then(OsChoice::from_id)
            .map(|os| os.name().to_string());
        Envelope::Ok(WebspaceState {
            running: self.running.lock().map(|r| *r).unwrap_or_default(),
            os,
            ..WebspaceState::default()
        })
    }

    async fn set_power(&self, action: PowerAction) -> Envelope<()> {
        self.count_post();
        let Ok(mut running) = self.running.lock() else {
            return Envelope::rejected("backend unavailable");
        };
        match (action, *running) {
            (PowerAction::Boot, true) => Envelope::rejected("webspace is already running"),
            (PowerAction::Reboot | PowerAction::Shutdown, false) => {
                Envelope::rejected("webspace is not running")
            }
            (PowerAction::Boot | PowerAction::Reboot, _) => {
                *running = true;
                Envelope::Ok(())
            }
            (PowerAction::Shutdown, true) => {
                *running = false;
                Envelope::Ok(())
            }
        }
    }

    async fn delete_webspace(&self) -> Envelope<()> {
        self.count_post();
        if let Ok(mut os) = self.os.lock() {
            *os = None;
        }
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
        Envelope::Ok(())
    }

    async fn remove_domain(&self, domain: &str) -> Envelope<()> {
        self.count_post();
        let Ok(mut domains) = self.domains.lock() else {
            return Envelope::rejected("backend unavailable");
        };
        let before = domains.len();
        domains.retain(|d| d != domain);
        if domains.len() == before {
            Envelope::rejected(format!("{domain} is not bound"))
        } else {
            Envelope::Ok(())
        }
    }

    async fn get_ports(&self) -> Envelope<PortMap> {
        Envelope::Ok(PortMap::new())
    }

    async fn remove_port(&self, external: u16) -> Envelope<()> {
        self.count_post();
        Envelope::rejected(format!("port {external} is not forwarded"))
    }

    async fn console_log(&self) -> Envelope<String> {
        Envelope::Ok(String::new())
    }

    async fn clear_console_log(&self) -> Envelope<()> {
        self.count_post();
        Envelope::Ok(())
    }
}

pub fn context(backend: &Arc<FakeBackend>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(backend.clone()))
}
