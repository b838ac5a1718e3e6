// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The simulated model service.
//!
//! [`SimulatedModels`] holds no mutable state of its own: it pairs the pure
//! rule tables with the injected latency and randomness. Build one at startup
//! and share it behind an `Arc`.

use std::sync::Arc;
use std::time::Duration;

use locallocal_core::{ChoiceSource, Latency, LocalLocalError};
use tracing::debug;

use crate::choice::{SeededRandom, ThreadRandom};
use crate::classifier::{classify, RoutingAnalysis};
use crate::latency::{NoLatency, SleepLatency};
use crate::responder::respond;

/// Simulated cost of a direct answer, in time units.
pub const DIRECT_COST_UNITS: f64 = 1.0;

/// Simulated cost of a routing analysis, in time units.
pub const ROUTE_COST_UNITS: f64 = 0.5;

/// Stand-in for the two locally hosted models.
#[derive(Clone)]
pub struct SimulatedModels {
    latency: Arc<dyn Latency>,
    choice: Arc<dyn ChoiceSource>,
}

impl std::fmt::Debug for SimulatedModels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedModels")
            .field("device", &self.device())
            .finish_non_exhaustive()
    }
}

impl SimulatedModels {
    pub fn new(latency: Arc<dyn Latency>, choice: Arc<dyn ChoiceSource>) -> Self {
        debug!("simulated models initialized");
        Self { latency, choice }
    }

    /// Production setup: real sleeps of `unit` per time unit, optional seeded jokes.
    pub fn with_sleep(unit: Duration, joke_seed: Option<u64>) -> Self {
        let choice: Arc<dyn ChoiceSource> = match joke_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Self::new(Arc::new(SleepLatency::new(unit)), choice)
    }

    /// No artificial delay.
    pub fn instant(choice: Arc<dyn ChoiceSource>) -> Self {
        Self::new(Arc::new(NoLatency), choice)
    }

    /// Device the models report running on.
    pub fn device(&self) -> &'static str {
        "cpu"
    }

    /// The simulated models are always ready.
    pub fn models_loaded(&self) -> bool {
        true
    }

    /// Direct answer to `text`.
    pub async fn respond_direct(&self, text: &str) -> Result<String, LocalLocalError> {
        self.latency.simulate(DIRECT_COST_UNITS).await?;
        let reply = respond(text, self.choice.as_ref());
        debug!(topic = %reply.topic, "direct response selected");
        Ok(reply.text)
    }

    /// Intent classification of `text`.
    pub async fn classify_route(&self, text: &str) -> Result<RoutingAnalysis, LocalLocalError> {
        self.latency.simulate(ROUTE_COST_UNITS).await?;
        let analysis = classify(text);
        debug!(
            category = %analysis.category,
            confidence = analysis.confidence,
            "routing analysis selected"
        );
        Ok(analysis)
    }
}
