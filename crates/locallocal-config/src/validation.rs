// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as valid bind addresses, timeout floors and known log levels.

use crate::diagnostic::ConfigError;
use crate::model::LocalLocalConfig;

/// Log levels accepted by `log.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Longest simulated time unit accepted, in milliseconds.
pub const MAX_TIME_UNIT_MS: u64 = 60_000;

/// Worst-case simulated cost of one request, in tenths of a time unit.
///
/// A pipeline request runs a direct answer (1 unit) and a routing analysis
/// (0.5 unit); 1.5 units covers them even when they run back to back.
pub const MAX_REQUEST_COST_TENTHS: u64 = 15;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &LocalLocalConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.server.request_timeout_secs < 1 {
        errors.push(ConfigError::Validation {
            message: "server.request_timeout_secs must be at least 1".to_string(),
        });
    }

    if config.engine.time_unit_ms > MAX_TIME_UNIT_MS {
        errors.push(ConfigError::Validation {
            message: format!(
                "engine.time_unit_ms must be at most {MAX_TIME_UNIT_MS}, got {}",
                config.engine.time_unit_ms
            ),
        });
    }

    // A zero timeout is already reported above.
    if config.engine.simulate_latency && config.server.request_timeout_secs >= 1 {
        let worst_case_ms = config
            .engine
            .time_unit_ms
            .saturating_mul(MAX_REQUEST_COST_TENTHS)
            / 10;
        let timeout_ms = config.server.request_timeout_secs.saturating_mul(1000);
        if worst_case_ms > timeout_ms {
            errors.push(ConfigError::Validation {
                message: format!(
                    "engine.time_unit_ms = {} makes a request take up to {worst_case_ms}ms, \
                     longer than server.request_timeout_secs = {}",
                    config.engine.time_unit_ms, config.server.request_timeout_secs
                ),
            });
        }
    }

    let level = config.log.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        let config = LocalLocalConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_host_fails_validation() {
        let mut config = LocalLocalConfig::default();
        config.server.host = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "server.host must not be empty"));
    }

    #[test]
    fn malformed_host_fails_validation() {
        let mut config = LocalLocalConfig::default();
        config.server.host = "local host!".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "not a valid IP address or hostname"));
    }

    #[test]
    fn hostname_and_ipv6_pass() {
        let mut config = LocalLocalConfig::default();
        config.server.host = "localhost".to_string();
        assert!(validate_config(&config).is_ok());
        config.server.host = "::1".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = LocalLocalConfig::default();
        config.server.request_timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "request_timeout_secs"));
    }

    #[test]
    fn oversized_time_unit_fails_validation() {
        let mut config = LocalLocalConfig::default();
        config.engine.time_unit_ms = MAX_TIME_UNIT_MS + 1;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "engine.time_unit_ms"));
    }

    #[test]
    fn time_unit_exceeding_request_timeout_fails_validation() {
        let mut config = LocalLocalConfig::default();
        config.engine.time_unit_ms = MAX_TIME_UNIT_MS;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(has_message(&errors, "longer than server.request_timeout_secs = 30"));
    }

    #[test]
    fn time_unit_bound_is_one_and_a_half_units() {
        let mut config = LocalLocalConfig::default();
        config.server.request_timeout_secs = 3;
        config.engine.time_unit_ms = 2_000;
        assert!(validate_config(&config).is_ok());

        config.engine.time_unit_ms = 2_001;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "engine.time_unit_ms = 2001"));
    }

    #[test]
    fn slow_time_unit_is_fine_without_simulated_latency() {
        let mut config = LocalLocalConfig::default();
        config.engine.time_unit_ms = MAX_TIME_UNIT_MS;
        config.engine.simulate_latency = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = LocalLocalConfig::default();
        config.log.level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "log.level `verbose`"));
    }

    #[test]
    fn collects_every_error() {
        let mut config = LocalLocalConfig::default();
        config.server.host = String::new();
        config.server.request_timeout_secs = 0;
        config.log.level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
