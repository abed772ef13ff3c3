use anyhow::{Context, Result};

use glowview::config::ClientConfig;

use crate::ConfigCommands;
use crate::cli_runtime::CliContext;

pub(super) fn handle_config_command(ctx: &CliContext, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Init { force } => {
            let path = ctx.config_path()?;
            ClientConfig::init(&path, force)?;
            println!("Wrote {}", path.display());
        }
        ConfigCommands::Show { json } => {
            let cfg = ctx.load_config()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg).context("serialize config json")?
                );
            } else {
                println!("base_url: {}", cfg.base_url);
                println!("page_size: {}", cfg.page_size);
                println!("app_link_base: {}", cfg.app_link_base);
                println!("error_path: {}", cfg.error_path);
                println!("timeout_secs: {}", cfg.timeout_secs);
            }
        }
    }
    Ok(())
}
