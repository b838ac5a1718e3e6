// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.
//!
//! Handles GET /, POST /chat, GET /health, GET /api/models and POST /api/chat.

use axum::{extract::State, response::Html, Form, Json};
use locallocal_core::{ModelChoice, ModelDescriptor};
use serde::{Deserialize, Serialize};

use crate::page::ChatPage;
use crate::server::GatewayState;

/// Form body for POST /chat, also the JSON body for POST /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Message text.
    pub user_input: String,
    /// `gemma`, `router` or `both`. Other values are answered, not rejected.
    pub model_choice: String,
}

/// Response body for POST /api/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub model_choice: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub models_loaded: bool,
    pub device: &'static str,
    pub mode: &'static str,
}

/// Response body for GET /api/models.
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelDescriptor>,
}

/// GET /
///
/// Serves the empty chat page.
pub async fn get_index() -> Html<String> {
    Html(ChatPage::default().render())
}

/// POST /chat
///
/// Runs the chat handler and re-renders the page with the exchange.
pub async fn post_chat(
    State(state): State<GatewayState>,
    Form(form): Form<ChatRequest>,
) -> Html<String> {
    let response = state
        .chat
        .handle_chat(&form.user_input, &form.model_choice)
        .await;

    Html(
        ChatPage {
            user_input: Some(&form.user_input),
            response: Some(&response),
            model_choice: Some(&form.model_choice),
        }
        .render(),
    )
}

/// POST /api/chat
///
/// JSON variant of POST /chat for programmatic clients.
pub async fn post_api_chat(
    State(state): State<GatewayState>,
    Json(body): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let response = state
        .chat
        .handle_chat(&body.user_input, &body.model_choice)
        .await;
    Json(ChatResponse {
        response,
        model_choice: body.model_choice,
    })
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    let models = state.chat.models();
    Json(HealthResponse {
        status: "healthy",
        models_loaded: models.models_loaded(),
        device: models.device(),
        mode: "mock_ai_simulation",
    })
}

/// GET /api/models
pub async fn get_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: ModelChoice::ALL.iter().map(|c| c.descriptor()).collect(),
    })
}
