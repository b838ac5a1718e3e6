// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./locallocal.toml` > `~/.config/locallocal/locallocal.toml`
//! > `/etc/locallocal/locallocal.toml` with environment variable overrides via
//! the `LOCALLOCAL_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LocalLocalConfig;

/// File name looked up in each directory of the hierarchy.
pub const CONFIG_FILE_NAME: &str = "locallocal.toml";

/// System-wide configuration path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/locallocal/locallocal.toml";

/// User configuration path under the XDG config directory, if one exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("locallocal").join(CONFIG_FILE_NAME))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/locallocal/locallocal.toml` (system-wide)
/// 3. `~/.config/locallocal/locallocal.toml` (user XDG config)
/// 4. `./locallocal.toml` (local directory)
/// 5. `LOCALLOCAL_*` environment variables
pub fn load_config() -> Result<LocalLocalConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<LocalLocalConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LocalLocalConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LocalLocalConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LocalLocalConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(LocalLocalConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(CONFIG_FILE_NAME))
        .merge(env_provider())
}

/// Environment variable provider mapping the first segment to a section.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `LOCALLOCAL_SERVER_REQUEST_TIMEOUT_SECS` must map to
/// `server.request_timeout_secs`, not `server.request.timeout.secs`.
fn env_provider() -> Env {
    Env::prefixed("LOCALLOCAL_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("server_", "server.", 1)
            .replacen("engine_", "engine.", 1)
            .replacen("log_", "log.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LOCALLOCAL_SERVER_PORT", "9100");
            jail.set_env("LOCALLOCAL_SERVER_REQUEST_TIMEOUT_SECS", "5");
            jail.set_env("LOCALLOCAL_ENGINE_JOKE_SEED", "7");
            jail.set_env("LOCALLOCAL_LOG_LEVEL", "debug");

            let config: LocalLocalConfig = Figment::new()
                .merge(Serialized::defaults(LocalLocalConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.server.port, 9100);
            assert_eq!(config.server.request_timeout_secs, 5);
            assert_eq!(config.engine.joke_seed, Some(7));
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE_NAME, "[engine]\nsimulate_latency = false\n")?;
            let config = load_config()?;
            assert!(!config.engine.simulate_latency);
            assert_eq!(config.server.port, 8000);
            Ok(())
        });
    }
}
