// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LocalLocal AI Chat.
//!
//! This is the binary entry point: it loads configuration, then serves the
//! chat page or answers a single message from the command line.

mod serve;
mod shutdown;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use locallocal_config::{ConfigError, LocalLocalConfig};

/// LocalLocal AI Chat - chat with simulated local models in the browser.
#[derive(Parser, Debug)]
#[command(name = "locallocal", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the chat server (default).
    Serve,
    /// Answer one message and exit.
    Ask {
        /// Model that answers the message.
        #[arg(long, short, default_value = "gemma", value_parser = ["gemma", "router", "both"])]
        model: String,
        /// Message text. Multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            locallocal_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Commands::Ask { model, text } => {
            serve::init_tracing(&config.log.level);
            let handler = serve::build_chat_handler(&config);
            println!("{}", handler.handle_chat(&text.join(" "), &model).await);
        }
        Commands::Config => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("error: failed to render configuration: {e}");
                std::process::exit(1);
            }
        },
    }
}

/// Load and validate configuration, from `path` when given.
fn load(path: Option<&Path>) -> Result<LocalLocalConfig, Vec<ConfigError>> {
    match path {
        // Figment treats a missing file as empty; an explicit path must exist.
        Some(path) if !path.is_file() => Err(vec![ConfigError::Other(format!(
            "config file not found: {}",
            path.display()
        ))]),
        Some(path) => locallocal_config::load_and_validate_path(path),
        None => locallocal_config::load_and_validate(),
    }
}
