// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Latency trait for simulated inference cost.

use async_trait::async_trait;

use crate::error::LocalLocalError;

/// Simulates the processing time of a model call.
///
/// `units` is expressed in abstract time units; the implementation decides
/// how long one unit lasts. Implementations must be cancel-safe: dropping the
/// returned future abandons the wait.
#[async_trait]
pub trait Latency: Send + Sync {
    /// Waits for `units` time units.
    async fn simulate(&self, units: f64) -> Result<(), LocalLocalError>;
}
