//! Record types produced by the extractor.
//!
//! One [`BookmarkRecord`] is built per `bookmark` element. Its icon and
//! application records are emitted grouped with it as [`Entry`] variants,
//! sharing the primary record through an [`Arc`] so it is constructed once
//! and never mutated.

use std::sync::Arc;

use crate::timestamp::Timestamp;

/// A `bookmark` element from a recently-used file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRecord {
    /// Record timestamp; a copy of `visited`.
    pub ts: Timestamp,
    /// User whose home directory holds the source file. Supplied by the caller.
    pub owning_user: String,
    /// Path of the file the record was extracted from. Supplied by the caller.
    pub source_path: String,
    pub href: Option<String>,
    pub added: Timestamp,
    pub modified: Timestamp,
    pub visited: Timestamp,
    /// Set only when exactly one `mime:mime-type` element is present.
    pub mime_type: Option<String>,
    /// Group names joined with `", "`; empty when there are none.
    pub groups: String,
    /// True when at least one `bookmark:private` marker is present.
    pub is_private: bool,
}

impl BookmarkRecord {
    pub const NAME: &'static str = "unix/linux/recently_used";
}

/// A `bookmark:icon` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IconRecord {
    pub icon_type: Option<String>,
    pub href: Option<String>,
    pub name: Option<String>,
}

impl IconRecord {
    pub const NAME: &'static str = "unix/linux/recently_used_icon";
}

/// A `bookmark:application` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationRecord {
    pub last_modified: Timestamp,
    pub name: Option<String>,
    pub exec: Option<String>,
    /// Raw `count` attribute, not validated.
    pub count: Option<String>,
}

impl ApplicationRecord {
    pub const NAME: &'static str = "unix/linux/recently_used_application";

    /// Numeric view of `count`; `None` when absent or not a non-negative integer.
    pub fn count_value(&self) -> Option<u64> {
        self.count.as_deref()?.trim().parse().ok()
    }
}

/// One item of the extractor's output.
///
/// Secondary records always travel with the bookmark that owns them, so
/// consumers never need to look them up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Primary(Arc<BookmarkRecord>),
    Icon(Arc<BookmarkRecord>, IconRecord),
    Application(Arc<BookmarkRecord>, ApplicationRecord),
}

impl Entry {
    /// Name of grouped (primary + secondary) entries.
    pub const GROUPED_NAME: &'static str = "unix/linux/recently_used/grouped";

    /// The owning bookmark, for every variant.
    pub fn bookmark(&self) -> &BookmarkRecord {
        match self {
            Entry::Primary(bookmark)
            | Entry::Icon(bookmark, _)
            | Entry::Application(bookmark, _) => bookmark,
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Entry::Primary(_))
    }

    pub fn icon(&self) -> Option<&IconRecord> {
        match self {
            Entry::Icon(_, icon) => Some(icon),
            _ => None,
        }
    }

    pub fn application(&self) -> Option<&ApplicationRecord> {
        match self {
            Entry::Application(_, app) => Some(app),
            _ => None,
        }
    }

    pub fn record_name(&self) -> &'static str {
        match self {
            Entry::Primary(_) => BookmarkRecord::NAME,
            Entry::Icon(..) | Entry::Application(..) => Self::GROUPED_NAME,
        }
    }
}
