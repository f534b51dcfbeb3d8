// ABOUTME: genui-cli - command-line driver for the generative UI tools
// ABOUTME: Lists tool descriptors and invokes a tool against an in-process conversation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print every tool descriptor with its JSON schema
//! genui-cli list
//!
//! # Invoke the recipe tool with input from a file
//! genui-cli invoke recipe --input oat_bowl.json
//!
//! # Invoke with input from stdin and debug logging
//! cat badges.json | genui-cli -v invoke achievement
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use genui_tools::config::GenUiConfig;
use genui_tools::errors::{AppError, AppResult, ErrorResponse};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "genui-cli",
    about = "Generative UI tools CLI",
    long_about = "List the generative UI tools and invoke them, printing every render instruction and the terminal result."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print tool descriptors as JSON
    List,

    /// Invoke a tool and stream its render instructions
    Invoke {
        /// Tool name (e.g. "recipe")
        tool: String,

        /// JSON input file (stdin when omitted)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Conversation handle to address
        #[arg(long, default_value = "cli")]
        conversation: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let response = ErrorResponse::from(e);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = GenUiConfig::from_env()?;
    if cli.verbose {
        config.logging = config.logging.verbose();
    }
    config
        .logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    info!("genui-cli starting");

    match cli.command {
        Command::List => commands::list(&config),
        Command::Invoke {
            tool,
            input,
            conversation,
        } => commands::invoke(&config, &tool, input.as_deref(), &conversation).await,
    }
}
