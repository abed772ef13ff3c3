use anyhow::{Context, Result};

use glowview::address::AddressSelection;
use glowview::remote::RemoteClient;
use glowview::screens::{Navigation, ProfileEditorScreen, SAVED_MESSAGE, SaveOutcome};

use super::notices::navigation_error;
use crate::ProfileCommands;
use crate::cli_runtime::CliContext;

pub(super) fn handle_profile_command(ctx: &CliContext, command: ProfileCommands) -> Result<()> {
    let cfg = ctx.load_config()?;
    let client = RemoteClient::new(&cfg)?;

    match command {
        ProfileCommands::Show { user_id, json } => {
            let mut screen = ProfileEditorScreen::new(&cfg, user_id);
            screen
                .load(&client)
                .map_err(|nav| navigation_error("get profile", nav))?;

            let model = screen.binder().model();
            if json {
                let fields: serde_json::Map<String, serde_json::Value> = model
                    .bound_keys()
                    .iter()
                    .map(|key| {
                        let value = model.value(key).unwrap_or_default();
                        (key.clone(), serde_json::Value::from(value))
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&fields).context("serialize profile json")?
                );
            } else {
                for key in model.bound_keys() {
                    println!(
                        "{}: {}",
                        model.label(key).unwrap_or(key.as_str()),
                        model.value(key).unwrap_or_default()
                    );
                }
            }
        }

        ProfileCommands::Edit {
            user_id,
            name,
            contact,
            address_more,
            address_json,
        } => {
            let mut screen = ProfileEditorScreen::new(&cfg, user_id);
            screen
                .load(&client)
                .map_err(|nav| navigation_error("get profile", nav))?;

            // The lookup clears the detail line, so it must run before --address-more.
            if let Some(path) = address_json {
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("read {}", path.display()))?;
                let selection: AddressSelection = serde_json::from_slice(&bytes)
                    .with_context(|| format!("parse {}", path.display()))?;
                screen.apply_address(&selection);
            }
            for (key, value) in [
                ("name", name),
                ("contact", contact),
                ("address_more", address_more),
            ] {
                if let Some(value) = value {
                    screen.edit(key, value);
                }
            }

            match screen.save(&client) {
                SaveOutcome::Saved(nav) => {
                    println!("{}", SAVED_MESSAGE);
                    if let Navigation::DeepLink(link) = nav {
                        println!("next: {}", link);
                    }
                }
                SaveOutcome::Invalid(err) => {
                    anyhow::bail!("{} (field `{}`)", err.prompt(), err.field)
                }
                SaveOutcome::NotReady => anyhow::bail!("profile is not ready to save"),
                SaveOutcome::Failed(nav) => return Err(navigation_error("save profile", nav)),
            }
        }
    }
    Ok(())
}
