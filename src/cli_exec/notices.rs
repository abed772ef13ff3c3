use std::num::NonZeroU32;

use anyhow::{Context, Result};

use glowview::remote::{NoticeFilter, RemoteClient};
use glowview::screens::{ListUpdate, Navigation, NoticeDetailScreen, NoticeListScreen};

use crate::NoticeCommands;
use crate::cli_runtime::CliContext;

pub(super) fn handle_notice_command(ctx: &CliContext, command: NoticeCommands) -> Result<()> {
    match command {
        NoticeCommands::List {
            limit,
            all,
            board_type,
            category,
            json,
        } => {
            let mut cfg = ctx.load_config()?;
            if let Some(limit) = limit {
                cfg.page_size = NonZeroU32::new(limit).context("--limit must be at least 1")?;
            }
            let client = RemoteClient::new(&cfg)?;
            let pages = client.notice_pages(NoticeFilter {
                board_type,
                board_category: category,
            });

            let mut screen = NoticeListScreen::new(&cfg);
            loop {
                match screen.load_more(&pages) {
                    ListUpdate::Appended(_) => {}
                    ListUpdate::Unchanged => break,
                    ListUpdate::Navigate(nav) => return Err(navigation_error("list notices", nav)),
                }
                if !all || !screen.loader().has_more() {
                    break;
                }
            }

            let rows = screen.rows();
            let more = screen.more_button();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "notices": rows,
                        "more": more,
                    }))
                    .context("serialize notices json")?
                );
            } else {
                for row in rows {
                    println!("{} {} {}", row.notice_id, row.date, row.subject);
                }
                if more.visible || more.present > 1 {
                    println!("page {}/{}", more.present, more.total);
                }
            }
        }

        NoticeCommands::Show { notice_id, json } => {
            let cfg = ctx.load_config()?;
            let client = RemoteClient::new(&cfg)?;
            let view = NoticeDetailScreen::new(&cfg, notice_id)
                .load(&client)
                .map_err(|nav| navigation_error("get notice", nav))?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&view).context("serialize notice json")?
                );
            } else {
                println!("{}", view.subject);
                println!("{}", view.date);
                if let Some(category) = &view.category {
                    println!("category: {}", category);
                }
                println!();
                println!("{}", view.content);
            }
        }
    }
    Ok(())
}

pub(super) fn navigation_error(label: &str, nav: Navigation) -> anyhow::Error {
    match nav {
        Navigation::ErrorScreen(url) => anyhow::anyhow!("{} failed (error screen: {})", label, url),
        Navigation::DeepLink(link) => anyhow::anyhow!("{} redirected to {}", label, link),
    }
}
