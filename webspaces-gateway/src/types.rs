use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GatewayError, Result};

// ============ Request / Response ============

/// HTTP method used by a [`RemoteRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the request may be retried.
    ///
    /// Only reads qualify. `PUT` reboots and `DELETE` shuts down or removes,
    /// so both are sent at most once.
    pub fn is_idempotent(self) -> bool {
        matches!(self, Self::Get)
    }
}

/// A single request to a backend endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRequest {
    pub method: Method,
    /// Endpoint path relative to the API base URL (e.g. `/api/login`).
    pub path: String,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl RemoteRequest {
    /// Build a request without a body.
    pub fn bare(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Build a `GET` request without a body.
    pub fn get(path: impl Into<String>) -> Self {
        Self::bare(Method::Get, path)
    }

    /// Build a `POST` request with a JSON body.
    pub fn post<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        let path = path.into();
        let body = serde_json::to_value(body).map_err(|e| GatewayError::SerializationError {
            endpoint: path.clone(),
            detail: e.to_string(),
        })?;
        Ok(Self {
            method: Method::Post,
            path,
            body: Some(body),
        })
    }
}

/// Raw successful response as returned by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

// ============ Login ============

/// `POST /api/login` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Which kind of member logged in, as reported by `/api/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginKind {
    /// First login: the member has not set up a webspace yet.
    FirstLogin,
    /// Returning member with an existing webspace.
    Returning,
}

// ============ Configs ============

/// Current webspace configuration.
///
/// Values are kept as raw JSON scalars so they can be displayed exactly as
/// the backend returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Configs {
    #[serde(rename = "HTTP", default)]
    pub http: Value,
    #[serde(rename = "HTTPS", default)]
    pub https: Value,
    #[serde(rename = "Startup", default)]
    pub startup: Value,
    #[serde(rename = "SSL", default)]
    pub ssl: Value,
}

/// Render a raw JSON scalar without any transformation of its content.
///
/// Strings are shown without surrounding quotes, `null` as an empty string,
/// everything else in its JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// `POST /api/submitConfigs` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigsSubmission {
    pub configs: Configs,
}

// ============ Domains ============

/// `GET /api/getDomains` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DomainList {
    #[serde(default)]
    pub domains: Vec<String>,
}

/// `POST /api/domains` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainSubmission {
    #[serde(rename = "toSubmit")]
    pub to_submit: DomainEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEntry {
    pub domain: String,
}

// ============ Ports ============

/// External to internal port forwarding, two pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub external1: u16,
    pub external2: u16,
    pub internal1: u16,
    pub internal2: u16,
}

/// `POST /api/ports` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortsSubmission {
    pub details: PortMapping,
}

/// `GET /api/ports` response body: external port to internal port.
pub type PortMap = BTreeMap<u16, u16>;

// ============ OS ============

/// Operating system images offered by the setup wizard.
///
/// The discriminant is the identifier the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsChoice {
    Arch = 1,
    Alpine = 2,
    Centos = 3,
    Debian = 4,
    Fedora = 5,
    Ubuntu = 6,
}

impl OsChoice {
    /// All choices in display order.
    pub const ALL: [OsChoice; 6] = [
        OsChoice::Arch,
        OsChoice::Alpine,
        OsChoice::Centos,
        OsChoice::Debian,
        OsChoice::Fedora,
        OsChoice::Ubuntu,
    ];

    /// Backend identifier (1..=6).
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Arch => "Arch",
            Self::Alpine => "Alpine",
            Self::Centos => "Centos",
            Self::Debian => "Debian",
            Self::Fedora => "Fedora",
            Self::Ubuntu => "Ubuntu",
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|os| os.id() == id)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|os| os.name().eq_ignore_ascii_case(name))
    }
}

/// `POST /api/os` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsSubmission {
    pub details: OsDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsDetails {
    pub os: u8,
}

// ============ Root password ============

/// `POST /api/root` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootPasswordSubmission {
    pub details: RootPasswordDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootPasswordDetails {
    pub password: String,
    pub confirm: String,
    /// Optional SSH public key; empty when not provided.
    pub ssh: String,
}

// ============ State ============

/// `GET /api/state` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WebspaceState {
    #[serde(default)]
    pub running: bool,
    /// Seconds since boot.
    #[serde(default)]
    pub uptime: f64,
    #[serde(default)]
    pub usage: Usage,
    /// Installed operating system, when the backend reports it.
    #[serde(default)]
    pub os: Option<String>,
}

/// Resource usage of a running webspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Usage {
    /// Total CPU time consumed, in nanoseconds.
    #[serde(default)]
    pub cpu: u64,
    /// Memory usage in bytes.
    #[serde(default)]
    pub memory: u64,
    #[serde(default)]
    pub processes: u64,
    /// Disk usage in bytes, by device name.
    #[serde(default)]
    pub disks: BTreeMap<String, u64>,
}

/// Power actions on `/api/state`; each maps to its own HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerAction {
    Boot,
    Reboot,
    Shutdown,
}

impl PowerAction {
    pub fn method(self) -> Method {
        match self {
            Self::Boot => Method::Post,
            Self::Reboot => Method::Put,
            Self::Shutdown => Method::Delete,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Boot => "Start",
            Self::Reboot => "Reboot",
            Self::Shutdown => "Shut down",
        }
    }
}

// ============ Raw discriminators ============

/// Response shape of endpoints that answer with a `state` field.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StateReply<T> {
    pub state: T,
}

/// Response shape of endpoints that answer with a `result` field.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResultReply {
    pub result: bool,
    #[serde(default)]
    pub domain: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn os_ids_match_backend_numbering() {
        assert_eq!(OsChoice::Arch.id(), 1);
        assert_eq!(OsChoice::Alpine.id(), 2);
        assert_eq!(OsChoice::Centos.id(), 3);
        assert_eq!(OsChoice::Debian.id(), 4);
        assert_eq!(OsChoice::Fedora.id(), 5);
        assert_eq!(OsChoice::Ubuntu.id(), 6);
        assert_eq!(OsChoice::from_id(7), None);
        assert_eq!(OsChoice::from_id(0), None);
    }

    #[test]
    fn os_from_name_ignores_case() {
        assert_eq!(OsChoice::from_name("ubuntu"), Some(OsChoice::Ubuntu));
        assert_eq!(OsChoice::from_name("Windows"), None);
    }

    #[test]
    fn configs_use_backend_field_names() {
        let configs = Configs {
            http: json!("80"),
            https: json!(443),
            startup: json!("5"),
            ssl: json!(true),
        };
        let value = serde_json::to_value(ConfigsSubmission { configs }).unwrap();
        assert_eq!(
            value,
            json!({"configs": {"HTTP": "80", "HTTPS": 443, "Startup": "5", "SSL": true}})
        );
    }

    #[test]
    fn domain_submission_uses_to_submit_key() {
        let body = DomainSubmission {
            to_submit: DomainEntry {
                domain: "example.com".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"toSubmit": {"domain": "example.com"}})
        );
    }

    #[test]
    fn display_value_keeps_content_verbatim() {
        assert_eq!(display_value(&json!("8080")), "8080");
        assert_eq!(display_value(&json!(8080)), "8080");
        assert_eq!(display_value(&json!(false)), "false");
        assert_eq!(display_value(&Value::Null), "");
    }

    #[test]
    fn state_decodes_usage_and_tolerates_missing_fields() {
        let state: WebspaceState = serde_json::from_value(json!({
            "running": true,
            "uptime": 12.5,
            "usage": {"cpu": 3_000_000_000_u64, "memory": 1024, "processes": 7, "disks": {"root": 2048}},
            "networkInterfaces": {}
        }))
        .unwrap();
        assert!(state.running);
        assert_eq!(state.usage.cpu, 3_000_000_000);
        assert_eq!(state.usage.disks.get("root"), Some(&2048));
        assert_eq!(state.os, None);

        let stopped: WebspaceState = serde_json::from_value(json!({"running": false})).unwrap();
        assert_eq!(stopped.usage, Usage::default());
    }

    #[test]
    fn port_map_keys_are_ports() {
        let ports: PortMap = serde_json::from_value(json!({"20000": 80, "20001": 443})).unwrap();
        assert_eq!(ports.get(&20000), Some(&80));
        assert_eq!(ports.len(), 2);
    }

    #[test]
    fn power_actions_use_distinct_methods() {
        assert_eq!(PowerAction::Boot.method(), Method::Post);
        assert_eq!(PowerAction::Reboot.method(), Method::Put);
        assert_eq!(PowerAction::Shutdown.method(), Method::Delete);
        assert!(!Method::Delete.is_idempotent());
    }

    #[test]
    fn post_request_carries_json_body() {
        let req = RemoteRequest::post(
            "/api/os",
            &OsSubmission {
                details: OsDetails { os: 6 },
            },
        )
        .unwrap();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.body, Some(json!({"details": {"os": 6}})));
    }
}
