// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Latency`] implementations.

use std::time::Duration;

use async_trait::async_trait;
use locallocal_core::{Latency, LocalLocalError};

/// Sleeps on the tokio timer for `units × unit`.
///
/// The sleep is cancelled when the enclosing future is dropped, so a
/// request deadline applied by the caller cuts it short.
#[derive(Debug, Clone, Copy)]
pub struct SleepLatency {
    unit: Duration,
}

impl SleepLatency {
    pub fn new(unit: Duration) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> Duration {
        self.unit
    }
}

impl Default for SleepLatency {
    /// One second per unit.
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl Latency for SleepLatency {
    async fn simulate(&self, units: f64) -> Result<(), LocalLocalError> {
        if !units.is_finite() || units < 0.0 {
            return Err(LocalLocalError::Internal(format!(
                "invalid latency cost: {units}"
            )));
        }
        tokio::time::sleep(self.unit.mul_f64(units)).await;
        Ok(())
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn simulate(&self, _units: f64) -> Result<(), LocalLocalError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_latency_scales_by_units() {
        let latency = SleepLatency::new(Duration::from_millis(1000));
        let start = tokio::time::Instant::now();
        latency.simulate(0.5).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
        latency.simulate(1.0).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn sleep_latency_is_cancellable() {
        let latency = SleepLatency::new(Duration::from_secs(60));
        let result =
            tokio::time::timeout(Duration::from_millis(10), latency.simulate(1.0)).await;
        assert!(result.is_err(), "timeout should fire before the sleep ends");
    }

    #[tokio::test]
    async fn sleep_latency_rejects_negative_cost() {
        let err = SleepLatency::default().simulate(-1.0).await.unwrap_err();
        assert!(matches!(err, LocalLocalError::Internal(_)));
    }

    #[tokio::test]
    async fn no_latency_returns_immediately() {
        NoLatency.simulate(1_000_000.0).await.unwrap();
    }
}
