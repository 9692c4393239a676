// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

use crate::config::PluginConfig;
use crate::plugin::SousuoPlugin;
use crate::tools::{ToolRegistry, FETCH_TOOL_NAME, SEARCH_TOOL_NAME};
use crate::version;

/// Sousuo search plugin CLI
#[derive(Parser, Debug)]
#[command(name = "sousuo-cli")]
#[command(version)]
#[command(about = "Run the sousuo search and fetch tools from a terminal", long_about = None)]
pub struct Cli {
    /// TOML config file, applied before SOUSUO_* environment variables
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the web and print the summary
    Search {
        /// Search keywords
        query: String,
    },

    /// Fetch a page and print its plain text
    Fetch {
        /// Page URL
        url: String,
    },

    /// Print the tool definitions advertised to the host
    Tools,
}

/// Load configuration: defaults, then file, then environment
pub fn load_config(path: Option<&PathBuf>) -> Result<PluginConfig> {
    let mut config = match path {
        Some(path) => PluginConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PluginConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    info!("{}", version::get_version_string());

    let config = load_config(cli.config.as_ref())?;
    let plugin = SousuoPlugin::new(config)?;

    let mut registry = ToolRegistry::new();
    plugin.initialize(&mut registry)?;

    match cli.command {
        Commands::Search { query } => {
            let answer = registry
                .invoke(SEARCH_TOOL_NAME, &Value::String(query))
                .await;
            println!("{}", answer);
        }
        Commands::Fetch { url } => {
            let answer = registry.invoke(FETCH_TOOL_NAME, &Value::String(url)).await;
            println!("{}", answer);
        }
        Commands::Tools => {
            let definitions = registry.definitions();
            println!("{}", serde_json::to_string_pretty(&definitions)?);
        }
    }

    Ok(())
}
