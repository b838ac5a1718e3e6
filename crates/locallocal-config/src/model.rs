// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for LocalLocal AI Chat.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Every section is optional; the defaults serve the chat page on
/// `0.0.0.0:8000` with one second of simulated inference latency.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LocalLocalConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Simulated model settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on engine time spent for a single chat request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Simulated model configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// When false, replies are produced without any artificial delay.
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,

    /// Length of one simulated time unit in milliseconds.
    /// A direct answer costs one unit, a routing analysis half a unit.
    #[serde(default = "default_time_unit_ms")]
    pub time_unit_ms: u64,

    /// Seed for joke selection. `None` uses the thread RNG.
    #[serde(default)]
    pub joke_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            simulate_latency: default_simulate_latency(),
            time_unit_ms: default_time_unit_ms(),
            joke_seed: None,
        }
    }
}

fn default_simulate_latency() -> bool {
    true
}

fn default_time_unit_ms() -> u64 {
    1000
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
