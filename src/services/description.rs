//! Description service — menu item name + ingredients → marketing blurb.
//!
//! DESIGN
//! ======
//! Generation never fails from the caller's point of view. A missing
//! credential, an unusable configuration or any provider error degrades to a
//! fixed fallback string, and the [`Description`] variant records which path
//! produced the text so callers can tell a real answer from a fallback.
//!
//! ERROR HANDLING
//! ==============
//! Missing-credential and misconfiguration problems are logged once at
//! construction. Request failures are logged per call. No retries and no
//! caching. Failure details stay in the logs; only [`DegradedKind`] leaves
//! the server.

#[cfg(test)]
#[path = "description_test.rs"]
mod description_test;

use std::sync::Arc;

use serde::Serialize;

use crate::llm::types::LlmError;
use crate::llm::{LlmClient, TextGenerator};

/// Returned when no generative-text credential is configured.
pub const MISSING_CREDENTIAL_FALLBACK: &str = "Fresh and delicious ingredients prepared daily.";

/// Returned when the generative-text request fails for any reason, or when
/// the configuration is unusable and no request can be made.
pub const REQUEST_FAILED_FALLBACK: &str = "A delicious blend of fresh ingredients.";

/// Why a description fell back to canned copy. Details are for logs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradedReason {
    MissingCredential,
    /// A credential is present but the rest of the configuration is not
    /// usable.
    Misconfigured(String),
    RequestFailed(String),
}

impl DegradedReason {
    #[must_use]
    pub fn kind(&self) -> DegradedKind {
        match self {
            Self::MissingCredential => DegradedKind::MissingCredential,
            Self::Misconfigured(_) => DegradedKind::Misconfigured,
            Self::RequestFailed(_) => DegradedKind::RequestFailed,
        }
    }
}

/// Detail-free form of [`DegradedReason`], safe to send to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedKind {
    MissingCredential,
    Misconfigured,
    RequestFailed,
}

/// Outcome of a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// Provider text, trimmed.
    Generated(String),
    /// Fixed fallback copy.
    Degraded { reason: DegradedReason, text: &'static str },
}

impl Description {
    /// Text to show to the customer regardless of outcome.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) => text.as_str(),
            Self::Degraded { text, .. } => *text,
        }
    }

    #[must_use]
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    #[must_use]
    pub fn degraded_reason(&self) -> Option<&DegradedReason> {
        match self {
            Self::Generated(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }
}

/// Build the fixed prompt sent to the provider.
#[must_use]
pub fn build_prompt(name: &str, ingredients: &str) -> String {
    format!(
        "Write a short, appetizing description (maximum two sentences) for a menu item called \
         \"{name}\" made with these ingredients: {ingredients}. Focus on freshness and flavor. \
         Reply with the description only."
    )
}

enum Backend {
    Ready(Arc<dyn TextGenerator>),
    MissingCredential,
    Misconfigured(String),
}

/// Drafts menu copy through an optional text-generation backend.
pub struct DescriptionGenerator {
    backend: Backend,
}

impl DescriptionGenerator {
    /// Wrap `backend`. `None` means no credential was configured; that is
    /// logged here, once.
    #[must_use]
    pub fn new(backend: Option<Arc<dyn TextGenerator>>) -> Self {
        let backend = match backend {
            Some(backend) => Backend::Ready(backend),
            None => {
                tracing::warn!("description generator has no credential; serving fallback copy");
                Backend::MissingCredential
            }
        };
        Self { backend }
    }

    /// Generator whose configuration could not be used. Logged here, once.
    #[must_use]
    pub fn misconfigured(err: &LlmError) -> Self {
        tracing::error!(
            error = %err,
            code = err.error_code(),
            "description generator misconfigured; serving fallback copy"
        );
        Self { backend: Backend::Misconfigured(err.to_string()) }
    }

    /// Build from environment configuration.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_client(LlmClient::from_env())
    }

    /// A missing credential leaves the generator without a backend; any
    /// other configuration error marks it misconfigured.
    fn from_client(client: Result<LlmClient, LlmError>) -> Self {
        match client {
            Ok(client) => {
                tracing::info!(model = client.model(), "description generator initialized");
                Self::new(Some(Arc::new(client) as Arc<dyn TextGenerator>))
            }
            Err(LlmError::MissingApiKey { var }) => {
                tracing::debug!(var = %var, "LLM credential not set");
                Self::new(None)
            }
            Err(e) => Self::misconfigured(&e),
        }
    }

    #[must_use]
    pub fn has_backend(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    /// Generate a description for `name` made from `ingredients`.
    pub async fn generate(&self, name: &str, ingredients: &str) -> Description {
        let backend = match &self.backend {
            Backend::Ready(backend) => backend,
            Backend::MissingCredential => {
                return Description::Degraded {
                    reason: DegradedReason::MissingCredential,
                    text: MISSING_CREDENTIAL_FALLBACK,
                };
            }
            Backend::Misconfigured(detail) => {
                return Description::Degraded {
                    reason: DegradedReason::Misconfigured(detail.clone()),
                    text: REQUEST_FAILED_FALLBACK,
                };
            }
        };

        let prompt = build_prompt(name, ingredients);
        match backend.generate_text(&prompt).await {
            Ok(text) => Description::Generated(text.trim().to_string()),
            Err(e) => {
                tracing::error!(error = %e, code = e.error_code(), item = name, "description generation failed");
                Description::Degraded {
                    reason: DegradedReason::RequestFailed(e.to_string()),
                    text: REQUEST_FAILED_FALLBACK,
                }
            }
        }
    }
}
