//! Normalised response envelope
//!
//! Every backend endpoint reports success differently (`state` as 0/1/2,
//! `state` as a boolean, `result` plus an echoed `domain`, ...). The endpoint
//! stubs in [`crate::api`] translate each of those shapes into one
//! [`Envelope`], so views only ever branch on three outcomes.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Outcome discriminator of an [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ok,
    Rejected,
    Error,
}

/// Tagged result of one gateway call.
///
/// - `Ok` — the backend accepted the action; carries the decoded detail.
/// - `Rejected` — the backend answered but refused (bad credentials,
///   mismatched passwords, ...); carries a user-facing message.
/// - `Error` — no usable answer (transport failure, HTTP error, undecodable body).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "lowercase")]
pub enum Envelope<T> {
    Ok(T),
    Rejected(String),
    Error(GatewayError),
}

impl<T> Envelope<T> {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            Self::Ok(_) => Outcome::Ok,
            Self::Rejected(_) => Outcome::Rejected,
            Self::Error(_) => Outcome::Error,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Detail of an `Ok` envelope.
    pub fn detail(&self) -> Option<&T> {
        match self {
            Self::Ok(detail) => Some(detail),
            _ => None,
        }
    }

    /// Transform the detail of an `Ok` envelope.
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(detail) => Envelope::Ok(f(detail)),
            Self::Rejected(msg) => Envelope::Rejected(msg),
            Self::Error(err) => Envelope::Error(err),
        }
    }

    /// Fold a fallible decode step into the envelope, logging transport errors.
    ///
    /// Expected errors (HTTP 4xx) are logged at `warn`, everything else at `error`.
    pub fn from_result(result: crate::Result<Self>) -> Self {
        match result {
            Ok(envelope) => envelope,
            Err(err) => {
                if err.is_expected() {
                    log::warn!("[gateway] {err}");
                } else {
                    log::error!("[gateway] {err}");
                }
                Self::Error(err)
            }
        }
    }
}
