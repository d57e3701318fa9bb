//! # webspaces-gateway
//!
//! The remote action gateway used by every interactive Webspaces view.
//!
//! A view hands the gateway one action; the gateway issues one HTTP request
//! and reports exactly one outcome as an [`Envelope`]:
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Ok(detail)` | backend accepted the action |
//! | `Rejected(message)` | backend answered and refused (bad login, password mismatch, ...) |
//! | `Error(GatewayError)` | transport failure, HTTP error status or undecodable body |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use webspaces_gateway::{
//!     Envelope, HttpWebspaceApi, LoginKind, ReqwestTransport, TransportOptions, WebspaceApi,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestTransport::new(TransportOptions::new("http://localhost:5000"))?;
//!     let api = HttpWebspaceApi::new(Arc::new(transport));
//!
//!     match api.login("member@example.com", "secret").await {
//!         Envelope::Ok(LoginKind::FirstLogin) => println!("-> /welcome"),
//!         Envelope::Ok(LoginKind::Returning) => println!("-> /dashboard"),
//!         Envelope::Rejected(msg) => println!("rejected: {msg}"),
//!         Envelope::Error(err) => println!("failed: {err}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Retries
//!
//! Idempotent reads (`getConfigs`, `getDomains`, `state`, `ports`, `log`) are
//! retried on transient failures with exponential backoff. Writes (`POST`,
//! `PUT`, `DELETE`) are sent at most once.

mod api;
mod envelope;
mod error;
mod http_client;
mod transport;
mod types;
mod utils;

pub use api::{
    DEFAULT_GET_RETRIES, HttpWebspaceApi, MSG_CONFIGS_REJECTED, MSG_INVALID_LOGIN,
    MSG_OS_REJECTED, MSG_PASSWORD_MISMATCH, MSG_PORTS_REJECTED, WebspaceApi, endpoints,
};
pub use envelope::{Envelope, Outcome};
pub use error::{GatewayError, Result};
pub use http_client::{HttpUtils, send_with_retry};
pub use transport::{DEFAULT_TIMEOUT, ReqwestTransport, Transport, TransportOptions, USER_HEADER};
pub use types::{
    Configs, ConfigsSubmission, DomainEntry, DomainList, DomainSubmission, LoginKind,
    LoginRequest, Method, OsChoice, OsDetails, OsSubmission, PortMap, PortMapping,
    PortsSubmission, PowerAction, RawResponse, RemoteRequest, RootPasswordDetails,
    RootPasswordSubmission, Usage, WebspaceState, display_value,
};
pub use utils::log_sanitizer;
