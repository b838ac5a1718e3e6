// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat request handling.
//!
//! [`ChatHandler::handle_chat`] is the single boundary between user input and
//! the simulated models. It never fails: empty input, unknown model choices,
//! engine errors and panics inside injected engine parts all become reply text.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use locallocal_core::{LocalLocalError, ModelChoice};
use tracing::{error, info};

use crate::models::SimulatedModels;

/// Reply for blank input.
pub const EMPTY_INPUT_REPLY: &str = "Please enter a message.";

/// Reply for an unrecognized model selector.
pub const INVALID_CHOICE_REPLY: &str = "Invalid model choice.";

/// Header of the routing block in pipeline replies.
pub const ROUTER_SECTION: &str = "🤖 Router Analysis:";

/// Header of the direct-answer block in pipeline replies.
pub const GEMMA_SECTION: &str = "💬 Gemma Response:";

/// Longest input prefix echoed into logs.
const LOG_PREVIEW_CHARS: usize = 50;

/// Turns a chat message and model selector into reply text.
#[derive(Debug, Clone)]
pub struct ChatHandler {
    models: Arc<SimulatedModels>,
    request_timeout: Option<Duration>,
}

impl ChatHandler {
    pub fn new(models: Arc<SimulatedModels>) -> Self {
        Self {
            models,
            request_timeout: None,
        }
    }

    /// Bound the engine time spent per request. Expiry yields an error reply.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn models(&self) -> &Arc<SimulatedModels> {
        &self.models
    }

    /// Produce the reply for `user_input` using the model named by `model_choice`.
    pub async fn handle_chat(&self, user_input: &str, model_choice: &str) -> String {
        if user_input.trim().is_empty() {
            return EMPTY_INPUT_REPLY.to_string();
        }

        let Ok(choice) = ModelChoice::from_str(model_choice) else {
            info!(model_choice, "rejecting unknown model choice");
            return INVALID_CHOICE_REPLY.to_string();
        };

        info!(model = %choice, "processing chat request");

        let outcome = AssertUnwindSafe(self.run(choice, user_input))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(panic_error(payload)));

        match outcome {
            Ok(reply) => {
                info!(input = %preview(user_input), "generated response");
                reply
            }
            Err(e) => {
                error!(error = %e, model = %choice, "chat request failed");
                format!("Sorry, there was an error processing your request: {e}")
            }
        }
    }

    async fn run(&self, choice: ModelChoice, user_input: &str) -> Result<String, LocalLocalError> {
        match choice {
            ModelChoice::Gemma => self.bounded(self.models.respond_direct(user_input)).await,
            ModelChoice::Router => self
                .bounded(self.models.classify_route(user_input))
                .await
                .map(|analysis| analysis.to_string()),
            ModelChoice::Both => {
                // Both models see the original input; the analysis is not fed
                // into the direct answer.
                let (analysis, answer) = self
                    .bounded(async {
                        tokio::try_join!(
                            self.models.classify_route(user_input),
                            self.models.respond_direct(user_input),
                        )
                    })
                    .await?;
                Ok(format!(
                    "{ROUTER_SECTION}\n{analysis}\n\n{GEMMA_SECTION}\n{answer}"
                ))
            }
        }
    }

    async fn bounded<T>(
        &self,
        work: impl Future<Output = Result<T, LocalLocalError>>,
    ) -> Result<T, LocalLocalError> {
        match self.request_timeout {
            Some(duration) => tokio::time::timeout(duration, work)
                .await
                .map_err(|_| LocalLocalError::Timeout { duration })?,
            None => work.await,
        }
    }
}

/// Convert a caught panic payload into an engine error.
fn panic_error(payload: Box<dyn Any + Send>) -> LocalLocalError {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    LocalLocalError::Engine {
        message: format!("model panicked: {detail}"),
        source: None,
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(LOG_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
