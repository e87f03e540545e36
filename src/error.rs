//! Error types for a single reconciliation run.

use std::fmt;

use thiserror::Error;

use crate::api::models::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

/// Which step of the workflow an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ResolveIp,
    LookupRecord,
    UpdateRecord,
    CreateRecord,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::ResolveIp => "resolve IP",
            Step::LookupRecord => "lookup record",
            Step::UpdateRecord => "update record",
            Step::CreateRecord => "create record",
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is absent. Raised before any request is made.
    #[error("missing required environment variables: {}", .missing.join(", "))]
    Config { missing: Vec<&'static str> },

    /// The request could not be completed: connect failure, timeout, bad
    /// status from the IP service or an unreadable body.
    #[error("failed to {step}: request failed")]
    Transport {
        step: Step,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be set up. Nothing has been sent yet.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The provider answered with `success: false`.
    #[error("failed to {step}: cloudflare API error: {}", format_errors(.errors))]
    Provider { step: Step, errors: Vec<ApiError> },

    /// The body did not match the shape expected for this call.
    #[error("failed to {step}: could not decode response")]
    Decode {
        step: Step,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn transport(step: Step, source: reqwest::Error) -> Self {
        Self::Transport { step, source }
    }

    pub fn decode(step: Step, source: serde_json::Error) -> Self {
        Self::Decode { step, source }
    }
}

fn format_errors(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no error details returned".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
