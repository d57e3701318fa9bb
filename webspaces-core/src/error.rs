//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::view::ViewId;

// Re-export gateway error type
pub use webspaces_gateway::GatewayError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A route (or a navigation) names a view the registry does not hold
    #[error("View not registered: {0}")]
    ViewNotRegistered(ViewId),

    /// A view name was registered twice
    #[error("View already registered: {0}")]
    DuplicateView(ViewId),

    /// Route table is malformed (wildcard missing, duplicated or not last)
    #[error("Invalid route table: {0}")]
    InvalidRouteTable(String),

    /// Trivial client-side validation failed
    #[error("{0}")]
    Validation(String),

    /// Gateway error (converting from library)
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, rejected request, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Gateway(e) => e.is_expected(),
            Self::ViewNotRegistered(_) | Self::DuplicateView(_) | Self::InvalidRouteTable(_) => {
                false
            }
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
