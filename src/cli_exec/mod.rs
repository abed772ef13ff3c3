use anyhow::Result;

use crate::Commands;
use crate::cli_runtime::CliContext;

mod config_cmds;
mod notices;
mod profile;

pub(super) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Notices { command } => notices::handle_notice_command(ctx, command),
        Commands::Profile { command } => profile::handle_profile_command(ctx, command),
        Commands::Config { command } => config_cmds::handle_config_command(ctx, command),
    }
}
