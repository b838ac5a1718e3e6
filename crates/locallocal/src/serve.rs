// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `locallocal serve` command implementation.
//!
//! Builds the simulated models from the `[engine]` section, wraps them in a
//! chat handler, and serves the chat page until SIGINT or SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use locallocal_config::model::{EngineConfig, LocalLocalConfig};
use locallocal_core::{ChoiceSource, LocalLocalError};
use locallocal_gateway::{start_server, GatewayState, ServerConfig};
use locallocal_router::{ChatHandler, SeededRandom, SimulatedModels, ThreadRandom};
use tracing::info;

use crate::shutdown;

/// Runs the `locallocal serve` command.
pub async fn run_serve(config: LocalLocalConfig) -> Result<(), LocalLocalError> {
    init_tracing(&config.log.level);

    let handler = build_chat_handler(&config);
    info!(
        simulate_latency = config.engine.simulate_latency,
        time_unit_ms = config.engine.time_unit_ms,
        "simulated models ready"
    );

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    info!("open {} in your browser", browse_url(&server_config));
    info!("Press Ctrl+C to stop the server");

    let token = shutdown::install_signal_handler();
    start_server(&server_config, GatewayState::new(handler), token).await
}

/// Simulated models configured by the `[engine]` section.
pub fn build_models(engine: &EngineConfig) -> SimulatedModels {
    if engine.simulate_latency {
        SimulatedModels::with_sleep(Duration::from_millis(engine.time_unit_ms), engine.joke_seed)
    } else {
        let choice: Arc<dyn ChoiceSource> = match engine.joke_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        SimulatedModels::instant(choice)
    }
}

/// Chat handler with the configured request timeout.
pub fn build_chat_handler(config: &LocalLocalConfig) -> ChatHandler {
    ChatHandler::new(Arc::new(build_models(&config.engine)))
        .with_request_timeout(Duration::from_secs(config.server.request_timeout_secs))
}

/// URL a browser on this machine can open. Wildcard binds map to localhost.
fn browse_url(config: &ServerConfig) -> String {
    let host = match config.host.as_str() {
        "0.0.0.0" | "::" | "[::]" => "localhost",
        other => other,
    };
    format!("http://{host}:{}", config.port)
}

pub(crate) fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("locallocal={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
