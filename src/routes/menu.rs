//! Menu routes — menu copy drafting.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::description::{DegradedKind, DegradedReason, Description};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("name is required")]
    MissingName,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingName => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct DescribeRequest {
    pub name: String,
    #[serde(default)]
    pub ingredients: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DescribeResponse {
    pub text: String,
    pub generated: bool,
    /// Reason kind only; failure details are logged, never sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<DegradedKind>,
}

impl From<Description> for DescribeResponse {
    fn from(description: Description) -> Self {
        Self {
            text: description.text().to_owned(),
            generated: description.is_generated(),
            degraded_reason: description.degraded_reason().map(DegradedReason::kind),
        }
    }
}

fn validate_describe_request(req: &DescribeRequest) -> Result<(&str, &str), ApiError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::MissingName);
    }
    Ok((name, req.ingredients.trim()))
}

/// `POST /api/menu/describe` — draft a short description for a menu item.
/// Provider trouble degrades to fallback copy, never to an error status.
pub async fn describe(
    State(state): State<AppState>,
    Json(req): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>, ApiError> {
    let (name, ingredients) = validate_describe_request(&req)?;
    let description = state.descriptions.generate(name, ingredients).await;
    tracing::debug!(item = name, generated = description.is_generated(), "menu description drafted");
    Ok(Json(description.into()))
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
