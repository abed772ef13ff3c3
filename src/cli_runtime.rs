use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use glowview::config::ClientConfig;

use crate::Commands;

#[derive(Parser)]
#[command(name = "glowview")]
#[command(about = "Notice and profile webview client", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to $GLOWVIEW_CONFIG or ~/.glowview/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured API base URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Debug logging (GLOWVIEW_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Global options every command handler sees.
pub(crate) struct CliContext {
    pub(crate) config_path: Option<PathBuf>,
    pub(crate) base_url: Option<String>,
}

impl CliContext {
    pub(crate) fn load_config(&self) -> Result<ClientConfig> {
        let mut cfg = ClientConfig::load(self.config_path.as_deref())?;
        if let Some(url) = &self.base_url {
            cfg.base_url = url.clone();
        }
        Ok(cfg)
    }

    pub(crate) fn config_path(&self) -> Result<PathBuf> {
        self.config_path
            .clone()
            .or_else(ClientConfig::default_path)
            .context("no config path (pass --config or set GLOWVIEW_CONFIG)")
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    glowview::logging::init(cli.verbose);

    let ctx = CliContext {
        config_path: cli.config,
        base_url: cli.base_url,
    };
    crate::cli_exec::handle_command(&ctx, cli.command)
}
