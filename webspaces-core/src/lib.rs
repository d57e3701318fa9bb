//! Webspaces Core Library
//!
//! UI-independent logic of the Webspaces client:
//! - Router (path → view, with a Not Found fallback)
//! - View Registry (view name → renderable unit)
//! - Setup wizard flow and its client-side progress
//! - Per-action busy guards
//! - View services turning one gateway call into one view effect
//!
//! The library knows nothing about the terminal; the UI layer supplies the
//! concrete view type stored in the registry.

pub mod effect;
pub mod error;
pub mod forms;
pub mod guard;
pub mod registry;
pub mod router;
pub mod services;
pub mod view;
pub mod wizard;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use effect::ViewEffect;
pub use error::{CoreError, CoreResult};
pub use forms::{ConfigsForm, PortsForm, SslSetting};
pub use guard::{Action, BusyGuard};
pub use registry::ViewRegistry;
pub use router::{Matched, Resolution, Route, RoutePattern, Router, default_routes, paths};
pub use services::ServiceContext;
pub use view::{Chrome, MountFetch, ViewId};
pub use wizard::{WizardProgress, WizardStep};
