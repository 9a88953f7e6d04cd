//! Listings of assistant modes and the dashboard features that host them.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use serde_json::json;

use crafthub_core::assistant::content::{reply_pool, welcome_text};
use crafthub_core::assistant::host::hosts;
use crafthub_types::assistant::AssistantMode;

use super::truncate;

/// Print every mode with its role and welcome message.
pub fn list_modes(json: bool) -> Result<()> {
    if json {
        let modes: Vec<_> = AssistantMode::ALL
            .iter()
            .map(|mode| {
                json!({
                    "mode": mode,
                    "label": mode.label(),
                    "welcome": welcome_text(*mode),
                    "replies": reply_pool(*mode).len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&modes)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Mode").fg(Color::White),
        Cell::new("Role").fg(Color::White),
        Cell::new("Welcome").fg(Color::White),
    ]);

    for mode in AssistantMode::ALL {
        table.add_row(vec![
            Cell::new(mode).fg(Color::Cyan),
            Cell::new(mode.label()),
            Cell::new(truncate(welcome_text(mode), 70)).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} Unknown modes fall back to {}",
        style("i").blue().bold(),
        style(AssistantMode::Generic).yellow()
    );
    println!();
    Ok(())
}

/// Print every dashboard feature that embeds an assistant.
pub fn list_hosts(json: bool) -> Result<()> {
    let hosts = hosts();

    if json {
        println!("{}", serde_json::to_string_pretty(&hosts)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Feature").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Mode").fg(Color::White),
        Cell::new("Placeholder").fg(Color::White),
    ]);

    for host in &hosts {
        table.add_row(vec![
            Cell::new(&host.feature_id).fg(Color::Cyan),
            Cell::new(&host.title),
            Cell::new(host.mode).fg(Color::Yellow),
            Cell::new(&host.placeholder).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} Open one with: {}",
        style("i").blue().bold(),
        style("crafthub chat --feature <FEATURE>").yellow()
    );
    println!();
    Ok(())
}
