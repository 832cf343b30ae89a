//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use wizbattle_domain::{ActionChoice, SpellList, WizardStats};

use crate::app::App;
use crate::use_cases::validation::{require_all_non_empty, require_non_empty, ValidationError};
use crate::use_cases::{GenerationError, SpellPrompt};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/generate_wizard_stats", post(generate_wizard_stats))
        .route("/generate_spells", post(generate_spells))
        .route("/generate_action", post(generate_action))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

// =============================================================================
// Generation
// =============================================================================

#[derive(Debug, Deserialize)]
struct WizardStatsRequest {
    description: String,
}

#[derive(Debug, Deserialize)]
struct SpellsRequest {
    description: String,
    name: String,
    primary_element: String,
    secondary_element: String,
    combat_style: String,
}

impl From<SpellsRequest> for SpellPrompt {
    fn from(req: SpellsRequest) -> Self {
        Self {
            description: req.description,
            name: req.name,
            primary_element: req.primary_element,
            secondary_element: req.secondary_element,
            combat_style: req.combat_style,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ActionRequest {
    system_prompt: String,
    user_prompt: String,
}

async fn generate_wizard_stats(
    State(app): State<Arc<App>>,
    body: Result<Json<WizardStatsRequest>, JsonRejection>,
) -> Result<Json<WizardStats>, ApiError> {
    let Json(req) = body?;
    require_non_empty(&req.description, "description")?;

    let stats = app
        .use_cases
        .generation
        .generate_wizard_stats(&req.description)
        .await?;
    Ok(Json(stats))
}

async fn generate_spells(
    State(app): State<Arc<App>>,
    body: Result<Json<SpellsRequest>, JsonRejection>,
) -> Result<Json<SpellList>, ApiError> {
    let Json(req) = body?;
    require_all_non_empty([
        (req.description.as_str(), "description"),
        (req.name.as_str(), "name"),
        (req.primary_element.as_str(), "primary_element"),
        (req.secondary_element.as_str(), "secondary_element"),
        (req.combat_style.as_str(), "combat_style"),
    ])?;

    let spells = app
        .use_cases
        .generation
        .generate_spells(&req.into())
        .await?;
    Ok(Json(spells))
}

async fn generate_action(
    State(app): State<Arc<App>>,
    body: Result<Json<ActionRequest>, JsonRejection>,
) -> Result<Json<ActionChoice>, ApiError> {
    let Json(req) = body?;
    require_all_non_empty([
        (req.system_prompt.as_str(), "system_prompt"),
        (req.user_prompt.as_str(), "user_prompt"),
    ])?;

    let choice = app
        .use_cases
        .generation
        .generate_action_choice(&req.system_prompt, &req.user_prompt)
        .await?;
    Ok(Json(choice))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    /// Body was not valid JSON for the route, or had the wrong content type.
    InvalidBody(JsonRejection),
    Validation(ValidationError),
    Generation(GenerationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody(rejection) => (
                rejection.status(),
                Json(json!({"detail": rejection.body_text()})),
            )
                .into_response(),
            ApiError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": e.to_string()})),
            )
                .into_response(),
            ApiError::Generation(e) => {
                tracing::error!(error = %e, "Generation request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": format!("Model generation failed: {e}")})),
                )
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        ApiError::Generation(e)
    }
}
