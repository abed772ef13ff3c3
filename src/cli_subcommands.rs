use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Browse notices
    Notices {
        #[command(subcommand)]
        command: NoticeCommands,
    },

    /// Show or edit a user profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum NoticeCommands {
    /// List notices, one page at a time
    List {
        /// Notices per page (defaults to config page_size)
        #[arg(long)]
        limit: Option<u32>,
        /// Keep loading until there are no more pages
        #[arg(long)]
        all: bool,
        /// Board type (service, ec)
        #[arg(long)]
        board_type: Option<String>,
        /// Board category code
        #[arg(long)]
        category: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single notice
    Show {
        notice_id: u64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum ProfileCommands {
    /// Show the editable profile fields
    Show {
        user_id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit and save the profile
    Edit {
        user_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        /// Detail line under the looked-up address
        #[arg(long)]
        address_more: Option<String>,
        /// Address-lookup result (JSON as the widget reports it)
        #[arg(long, value_name = "FILE")]
        address_json: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective config
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}
