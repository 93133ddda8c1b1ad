//! Text and JSON rendering of a projected view.

use chrono::{DateTime, Local};
use serde_json::json;
use std::io::{self, Write};
use taskledger_core::{EntryAction, Projection, Timestamp, View};

/// Formats an opaque core timestamp as local wall-clock time.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    DateTime::from_timestamp_millis(timestamp.epoch_ms())
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| format!("@{}ms", timestamp.epoch_ms()))
}

/// Writes the tab bar, then either the entries or the empty placeholder.
pub fn render_text(out: &mut impl Write, projection: &Projection<'_>) -> io::Result<()> {
    let tabs: Vec<String> = View::ALL
        .iter()
        .map(|view| {
            if *view == projection.view() {
                format!("[{}]", view.title())
            } else {
                format!(" {} ", view.title())
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join(" "))?;

    if let Some(message) = projection.empty_message() {
        return writeln!(out, "  {message}");
    }

    for entry in projection.entries() {
        let hint = match entry.action() {
            EntryAction::Delete => format!("  (delete {})", entry.id()),
            EntryAction::PurgeForever => format!("  (purge {})", entry.id()),
            EntryAction::None => String::new(),
        };
        writeln!(out, "  #{} {}{}", entry.id(), entry.text(), hint)?;
        writeln!(
            out,
            "      {}: {}",
            entry.timestamp_label(),
            format_timestamp(entry.timestamp())
        )?;
    }
    Ok(())
}

/// Writes the projection as one JSON line.
pub fn render_json(out: &mut impl Write, projection: &Projection<'_>) -> io::Result<()> {
    let entries: Vec<_> = projection
        .entries()
        .map(|entry| {
            json!({
                "record": entry,
                "action": entry.action(),
            })
        })
        .collect();
    let value = json!({
        "view": projection.view(),
        "entries": entries,
        "empty_message": projection.empty_message(),
    });
    writeln!(out, "{value}")
}
