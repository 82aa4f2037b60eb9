//! Render: one human-readable line per [`Entry`].
//!
//! Primary lines start with the bookmark record name; grouped icon and
//! application lines are indented under the bookmark they belong to.
//! Absent attributes print as `-`.

use std::fmt::Write as _;

use recently_core::config::OutputConfig;
use recently_core::{ApplicationRecord, BookmarkRecord, Entry, IconRecord, Timestamp};

/// Render `entry`, or `None` when the config filters its kind out.
pub fn render_entry(entry: &Entry, cfg: &OutputConfig) -> Option<String> {
    match entry {
        Entry::Primary(bookmark) => Some(render_bookmark(bookmark, cfg)),
        Entry::Icon(_, icon) if cfg.include_icons => Some(render_icon(icon)),
        Entry::Application(_, app) if cfg.include_applications => {
            Some(render_application(app, cfg))
        }
        Entry::Icon(..) | Entry::Application(..) => None,
    }
}

/// Render every entry of an iterator, newline-terminated.
pub fn render_all<I>(entries: I, cfg: &OutputConfig) -> String
where
    I: IntoIterator<Item = Entry>,
{
    let mut out = String::new();
    for entry in entries {
        if let Some(line) = render_entry(&entry, cfg) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

pub fn format_timestamp(ts: &Timestamp, cfg: &OutputConfig) -> String {
    match ts {
        Timestamp::Known(dt) => {
            let mut out = String::new();
            // A bad user-supplied format string makes chrono's Display fail.
            if write!(out, "{}", dt.format(&cfg.timestamp_format)).is_err() {
                return ts.to_string();
            }
            out
        }
        Timestamp::Unknown => cfg.unknown_timestamp.clone(),
    }
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn render_bookmark(bookmark: &BookmarkRecord, cfg: &OutputConfig) -> String {
    format!(
        "{} ts={} user={} source={} href={} added={} modified={} visited={} mime_type={} groups={:?} private={}",
        BookmarkRecord::NAME,
        format_timestamp(&bookmark.ts, cfg),
        bookmark.owning_user,
        bookmark.source_path,
        or_dash(&bookmark.href),
        format_timestamp(&bookmark.added, cfg),
        format_timestamp(&bookmark.modified, cfg),
        format_timestamp(&bookmark.visited, cfg),
        or_dash(&bookmark.mime_type),
        bookmark.groups,
        bookmark.is_private,
    )
}

fn render_icon(icon: &IconRecord) -> String {
    format!(
        "  {} type={} href={} name={}",
        IconRecord::NAME,
        or_dash(&icon.icon_type),
        or_dash(&icon.href),
        or_dash(&icon.name),
    )
}

fn render_application(app: &ApplicationRecord, cfg: &OutputConfig) -> String {
    format!(
        "  {} ts={} name={} exec={:?} count={}",
        ApplicationRecord::NAME,
        format_timestamp(&app.last_modified, cfg),
        or_dash(&app.name),
        or_dash(&app.exec),
        or_dash(&app.count),
    )
}
